//! Rendering of target expressions as markup fragments.
//!
//! Only the expression element itself is rendered; wrapping it into a
//! derived field or a full document is left to the caller.

use crate::pmml::expr::{Apply, Constant, FieldRef, PmmlExpression};
use std::fmt::{self, Write};

const INDENT: &str = "  ";

/// Render an expression as an indented markup fragment
pub fn to_markup(expr: &PmmlExpression) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = write_expression(&mut out, expr, 0);
    out
}

fn write_expression<W: Write>(out: &mut W, expr: &PmmlExpression, level: usize) -> fmt::Result {
    match expr {
        PmmlExpression::FieldRef(field_ref) => write_field_ref(out, field_ref, level),
        PmmlExpression::Apply(apply) => write_apply(out, apply, level),
        PmmlExpression::Constant(constant) => write_constant(out, constant, level),
    }
}

fn write_indent<W: Write>(out: &mut W, level: usize) -> fmt::Result {
    for _ in 0..level {
        out.write_str(INDENT)?;
    }
    Ok(())
}

fn write_field_ref<W: Write>(out: &mut W, field_ref: &FieldRef, level: usize) -> fmt::Result {
    write_indent(out, level)?;
    writeln!(out, "<FieldRef field=\"{}\"/>", escape(&field_ref.field))
}

fn write_apply<W: Write>(out: &mut W, apply: &Apply, level: usize) -> fmt::Result {
    write_indent(out, level)?;
    if apply.arguments.is_empty() {
        return writeln!(out, "<Apply function=\"{}\"/>", escape(&apply.function));
    }

    writeln!(out, "<Apply function=\"{}\">", escape(&apply.function))?;
    for argument in &apply.arguments {
        write_expression(out, argument, level + 1)?;
    }
    write_indent(out, level)?;
    writeln!(out, "</Apply>")
}

fn write_constant<W: Write>(out: &mut W, constant: &Constant, level: usize) -> fmt::Result {
    write_indent(out, level)?;
    match constant.value.to_markup_text() {
        Some(text) => writeln!(
            out,
            "<Constant dataType=\"{}\">{}</Constant>",
            constant.data_type,
            escape(&text)
        ),
        None => writeln!(
            out,
            "<Constant dataType=\"{}\" missing=\"true\"/>",
            constant.data_type
        ),
    }
}

/// Escape text for use in attribute values and element content
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

impl fmt::Display for PmmlExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_expression(f, self, 0)
    }
}
