// src/table.rs
//
// Boxed text grid for the screen result. Index column first (right aligned,
// no header), then the fixed data columns (left aligned). A column is as wide
// as its widest cell, but never narrower than its header plus two.

use crate::{config::consts::RENDER_HEADERS, core::NumberFormat, fund::Fund};

/// Render funds in the given order.
pub fn render<'a, I>(funds: I, fmt: &NumberFormat) -> String
where
    I: IntoIterator<Item = &'a Fund>,
{
    let rows: Vec<Vec<String>> = funds
        .into_iter()
        .map(|f| {
            vec![
                f.code.clone(),
                f.segment.clone(),
                fmt.currency(f.quote),
                join!(&fmt.general(f.dividend_yield), "%"),
            ]
        })
        .collect();
    grid(&RENDER_HEADERS, &rows)
}

#[derive(Clone, Copy)]
enum Align { Left, Right }

struct Border {
    left: char,
    fill: char,
    cross: char,
    right: char,
}

const TOP: Border = Border { left: '╒', fill: '═', cross: '╤', right: '╕' };
const HEAD_SEP: Border = Border { left: '╞', fill: '═', cross: '╪', right: '╡' };
const ROW_SEP: Border = Border { left: '├', fill: '─', cross: '┼', right: '┤' };
const BOTTOM: Border = Border { left: '╘', fill: '═', cross: '╧', right: '╛' };

/// Grid with a zero-based index column prepended.
pub fn grid(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut head: Vec<String> = Vec::with_capacity(headers.len() + 1);
    head.push(s!());
    head.extend(headers.iter().map(|h| s!(*h)));

    let body: Vec<Vec<String>> = rows
        .iter()
        .enumerate()
        .map(|(i, r)| {
            let mut line = Vec::with_capacity(r.len() + 1);
            line.push(i.to_string());
            line.extend(r.iter().cloned());
            line
        })
        .collect();

    let ncols = head.len();
    let widths: Vec<usize> = (0..ncols)
        .map(|c| {
            let cells = body.iter().filter_map(|r| r.get(c)).map(|s| width(s));
            cells.fold(width(&head[c]) + 2, usize::max)
        })
        .collect();
    let align = |c: usize| if c == 0 { Align::Right } else { Align::Left };

    let mut lines = Vec::with_capacity(2 * body.len() + 3);
    lines.push(rule(&TOP, &widths));
    lines.push(line(&head, &widths, align));
    if !body.is_empty() {
        lines.push(rule(&HEAD_SEP, &widths));
    }
    for (i, r) in body.iter().enumerate() {
        if i > 0 {
            lines.push(rule(&ROW_SEP, &widths));
        }
        lines.push(line(r, &widths, align));
    }
    lines.push(rule(&BOTTOM, &widths));
    lines.join("\n")
}

fn width(s: &str) -> usize { s.chars().count() }

fn rule(b: &Border, widths: &[usize]) -> String {
    let segs: Vec<String> = widths
        .iter()
        .map(|w| std::iter::repeat_n(b.fill, w + 2).collect())
        .collect();
    let mut out = String::new();
    out.push(b.left);
    out.push_str(&segs.join(&b.cross.to_string()));
    out.push(b.right);
    out
}

fn line(cells: &[String], widths: &[usize], align: impl Fn(usize) -> Align) -> String {
    let mut out = s!("│");
    for (c, w) in widths.iter().enumerate() {
        let cell = cells.get(c).map(String::as_str).unwrap_or("");
        let pad = w.saturating_sub(width(cell));
        out.push(' ');
        match align(c) {
            Align::Left => {
                out.push_str(cell);
                out.extend(std::iter::repeat_n(' ', pad));
            }
            Align::Right => {
                out.extend(std::iter::repeat_n(' ', pad));
                out.push_str(cell);
            }
        }
        out.push_str(" │");
    }
    out
}
