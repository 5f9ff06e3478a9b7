//! Ochre CLI
//!
//! Evaluates JSON-encoded `calc()` trees and classifies the invalidation a
//! change between two JSON-encoded style snapshots requires.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ochre_common::warning::{clear_warnings, warning_count};
use ochre_css::calc::{CalcExpression, EvaluationContext, resolve_type};
use ochre_css::invalidation::classify;
use ochre_css::style::{
    BuiltinProperties, FontCache, PropertyClassification, PropertyId, SnapshotDocument,
    StyleSnapshot, StyleValue,
};
use ochre_css::values::{DEFAULT_FONT_SIZE_PX, LengthContext, Quantity, Viewport};
use owo_colors::OwoColorize;

/// Ochre: typed CSS value evaluation and style invalidation
#[derive(Parser, Debug)]
#[command(name = "ochre")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Evaluate an expression tree
    ochre eval width.json

    # Resolve percentages against a 640px containing block
    ochre eval width.json --basis 640px

    # Resolve em/rem/vw lengths
    ochre eval width.json --font-size 20 --viewport 1920x1080

    # Classify the change between two computed styles
    ochre diff before.json after.json
"#)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Type-check and evaluate a JSON calc() expression tree
    Eval {
        /// JSON file holding the expression tree
        #[arg(value_name = "FILE")]
        path: PathBuf,

        /// Quantity percentages resolve against (e.g. 640px, 90deg)
        #[arg(long, value_name = "QUANTITY")]
        basis: Option<Quantity>,

        /// Element font size in px; enables relative lengths
        #[arg(long, value_name = "PX")]
        font_size: Option<f64>,

        /// Root element font size in px; enables relative lengths
        #[arg(long, value_name = "PX")]
        root_font_size: Option<f64>,

        /// Viewport size; enables relative lengths
        #[arg(long, value_name = "WxH", value_parser = parse_viewport)]
        viewport: Option<Viewport>,
    },
    /// Classify the invalidation between two JSON style snapshots
    Diff {
        /// Snapshot before the change
        #[arg(value_name = "OLD")]
        old: PathBuf,

        /// Snapshot after the change
        #[arg(value_name = "NEW")]
        new: PathBuf,
    },
}

/// Default viewport when only font sizes are given.
const DEFAULT_VIEWPORT: Viewport = Viewport {
    width: 1280.0,
    height: 720.0,
};

fn main() -> Result<()> {
    let cli = Cli::parse();
    clear_warnings();

    match cli.command {
        Command::Eval {
            path,
            basis,
            font_size,
            root_font_size,
            viewport,
        } => {
            let context = length_context(font_size, root_font_size, viewport);
            let expression = read_expression(&path)?;
            for line in eval_report(&expression, basis, context.as_ref()) {
                println!("{line}");
            }
        }
        Command::Diff { old, new } => {
            let mut fonts = FontCache::new();
            let old = read_snapshot(&old)?.into_snapshot(&mut fonts);
            let new = read_snapshot(&new)?.into_snapshot(&mut fonts);
            for line in diff_report(&old, &new) {
                println!("{line}");
            }
        }
    }

    let warnings = warning_count();
    if warnings > 0 {
        eprintln!("{}", format!("{warnings} warning(s)").yellow());
    }
    Ok(())
}

/// Parse `WIDTHxHEIGHT`.
fn parse_viewport(text: &str) -> Result<Viewport, String> {
    let (width, height) = text
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{text}'"))?;
    let parse = |part: &str| {
        part.trim()
            .parse::<f64>()
            .map_err(|error| format!("invalid viewport size '{part}': {error}"))
    };
    Ok(Viewport {
        width: parse(width)?,
        height: parse(height)?,
    })
}

/// A length context if any of its inputs was given.
fn length_context(
    font_size: Option<f64>,
    root_font_size: Option<f64>,
    viewport: Option<Viewport>,
) -> Option<LengthContext> {
    if font_size.is_none() && root_font_size.is_none() && viewport.is_none() {
        return None;
    }
    Some(LengthContext::new(
        font_size.unwrap_or(DEFAULT_FONT_SIZE_PX),
        root_font_size.unwrap_or(DEFAULT_FONT_SIZE_PX),
        viewport.unwrap_or(DEFAULT_VIEWPORT),
    ))
}

fn read_expression(path: &Path) -> Result<CalcExpression> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("{} is not a calc() expression tree", path.display()))
}

fn read_snapshot(path: &Path) -> Result<SnapshotDocument> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("{} is not a style snapshot", path.display()))
}

/// The lines `ochre eval` prints.
fn eval_report(
    expression: &CalcExpression,
    basis: Option<Quantity>,
    length_context: Option<&LengthContext>,
) -> Vec<String> {
    let mut lines = vec![format!("{} calc({expression})", "expression:".bold())];

    let Some(resolved_type) = resolve_type(expression) else {
        lines.push(format!("{} {}", "type:".bold(), "invalid".red()));
        return lines;
    };
    lines.push(format!("{} {resolved_type}", "type:".bold()));

    let context = EvaluationContext::new()
        .with_percentage_basis(basis)
        .with_length_context(length_context);
    match expression.evaluate(&context) {
        Ok(result) => lines.push(format!("{} {}", "value:".bold(), result.value().green())),
        Err(error) => lines.push(format!("{} {}", "value:".bold(), error.red())),
    }
    lines
}

/// Which table bucket a property falls in.
fn property_class(property: PropertyId) -> &'static str {
    let table = BuiltinProperties;
    if table.affects_layout(property) {
        "layout"
    } else if table.affects_stacking_context(property) {
        "stacking"
    } else {
        "paint"
    }
}

fn describe(value: Option<&Arc<StyleValue>>) -> String {
    value.map_or_else(|| "(none)".to_string(), ToString::to_string)
}

/// The lines `ochre diff` prints.
fn diff_report(old: &StyleSnapshot, new: &StyleSnapshot) -> Vec<String> {
    let invalidation = classify(old, new);
    let name = invalidation.to_string();
    let label = if invalidation.needs_relayout() {
        name.red().to_string()
    } else if invalidation.needs_stacking_context_rebuild() {
        name.yellow().to_string()
    } else if invalidation.needs_repaint() {
        name.cyan().to_string()
    } else {
        name.green().to_string()
    };
    let mut lines = vec![format!("{} {label}", "invalidation:".bold())];

    if !Arc::ptr_eq(old.font(), new.font()) {
        lines.push(format!(
            "  font: {} {}px -> {} {}px",
            old.font().family,
            old.font().size,
            new.font().family,
            new.font().size
        ));
    }

    for &property in PropertyId::ALL {
        let (before, after) = (old.property(property), new.property(property));
        if before == after {
            continue;
        }
        lines.push(format!(
            "  {property} [{}]: {} -> {}",
            property_class(property),
            describe(before),
            describe(after)
        ));
    }
    lines
}

#[cfg(test)]
mod tests {
    use ochre_css::calc::{CalcProduct, CalcSum};
    use ochre_css::invalidation::RequiredInvalidation;
    use ochre_css::style::FontDescription;
    use ochre_css::values::{ColorValue, Length};

    use super::*;

    fn q(text: &str) -> Quantity {
        text.parse().unwrap()
    }

    #[test]
    fn test_parse_viewport() {
        assert_eq!(
            parse_viewport("1920x1080"),
            Ok(Viewport {
                width: 1920.0,
                height: 1080.0,
            })
        );
        assert!(parse_viewport("1920").is_err());
        assert!(parse_viewport("widexhigh").is_err());
    }

    #[test]
    fn test_length_context_only_when_requested() {
        assert!(length_context(None, None, None).is_none());
        let context = length_context(Some(20.0), None, None).unwrap();
        assert_eq!(context.font_size, 20.0);
        assert_eq!(context.root_font_size, DEFAULT_FONT_SIZE_PX);
        assert_eq!(context.viewport, DEFAULT_VIEWPORT);
    }

    #[test]
    fn test_eval_report() {
        let expression = CalcSum::leaf(q("1px")).plus(CalcProduct::leaf(q("2%")));
        let lines = eval_report(&expression, Some(q("10px")), None);
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("calc(1px + 2%)"));
        assert!(lines[1].contains("length"));
        assert!(lines[2].contains("1.2px"));

        let missing = eval_report(&expression, None, None);
        assert!(missing[2].contains("percentage basis"));

        let invalid = CalcSum::leaf(q("1px")).plus(CalcProduct::leaf(q("1s")));
        let lines = eval_report(&invalid, None, None);
        assert_eq!(lines.len(), 2);
        assert!(lines[1].contains("invalid"));
    }

    #[test]
    fn test_diff_report() {
        let mut fonts = FontCache::new();
        let font = fonts.get_or_insert(&FontDescription::new("Serif", 16.0));
        let old = StyleSnapshot::builder(Arc::clone(&font))
            .set(PropertyId::Color, StyleValue::color(ColorValue::BLACK))
            .set(PropertyId::Width, StyleValue::length(Length::px(10.0)))
            .build();
        let new = StyleSnapshot::builder(font)
            .set(PropertyId::Color, StyleValue::color(ColorValue::WHITE))
            .set(PropertyId::Width, StyleValue::length(Length::px(10.0)))
            .build();
        let lines = diff_report(&old, &new);
        assert!(lines[0].contains("RepaintOnly"));
        assert_eq!(lines.len(), 2);
        assert!(lines[1].contains("color [paint]: rgb(0, 0, 0) -> rgb(255, 255, 255)"));
    }

    #[test]
    fn test_diff_report_layout_change() {
        let mut fonts = FontCache::new();
        let font = fonts.get_or_insert(&FontDescription::new("Serif", 16.0));
        let old = StyleSnapshot::builder(Arc::clone(&font))
            .set(PropertyId::Width, StyleValue::length(Length::px(10.0)))
            .build();
        let new = StyleSnapshot::builder(font)
            .set(PropertyId::Width, StyleValue::length(Length::px(20.0)))
            .build();
        let lines = diff_report(&old, &new);
        assert!(lines[0].contains("Relayout"));
        assert!(lines[1].contains("width [layout]: 10px -> 20px"));
    }

    #[test]
    fn test_demo_inputs() {
        let expression: CalcExpression =
            serde_json::from_str(include_str!("../../demos/width.json")).unwrap();
        let context = length_context(Some(20.0), None, None);
        let lines = eval_report(&expression, Some(q("640px")), context.as_ref());
        assert!(lines[0].contains("calc(100% - (2em + 10px) / 2)"));
        assert!(lines[2].contains("615px"));

        let mut fonts = FontCache::new();
        let old: SnapshotDocument =
            serde_json::from_str(include_str!("../../demos/before.json")).unwrap();
        let new: SnapshotDocument =
            serde_json::from_str(include_str!("../../demos/after.json")).unwrap();
        let (old, new) = (old.into_snapshot(&mut fonts), new.into_snapshot(&mut fonts));
        assert_eq!(
            classify(&old, &new),
            RequiredInvalidation::RebuildStackingContextTree
        );
    }
}
