//! Integration tests for numeric values and style values.

use std::sync::Arc;

use ochre_css::calc::{CalcProduct, CalcSum, CalculatedStyleValue};
use ochre_css::style::{
    BorderRadiusStyleValue, BorderStyleValue, ColorFilterOperation, EndingShape, FilterFunction,
    FilterValueListStyleValue, LengthPercentage, ListStyleStyleValue, NumberPercentage,
    PositionValue, RadialExtent, RadialGradientStyleValue, RadialSize, StyleValue,
    StyleValueList, TransformFunction, TransformationStyleValue, ValueSeparator,
};
use ochre_css::values::{
    Angle, AngleUnit, ColorValue, Frequency, FrequencyUnit, Length, LengthContext, LengthUnit,
    Percentage, Quantity, QuantityKind, Time, TimeUnit, Viewport,
};

fn context() -> LengthContext {
    LengthContext::new(10.0, 16.0, Viewport {
        width: 1200.0,
        height: 800.0,
    })
}

#[test]
fn test_absolute_length_table() {
    let cases = [
        ("1in", 96.0),
        ("2.54cm", 96.0),
        ("25.4mm", 96.0),
        ("40Q", 96.0 / 2.54),
        ("72pt", 96.0),
        ("6pc", 96.0),
        ("3px", 3.0),
    ];
    for (text, expected) in cases {
        let Ok(Quantity::Length(length)) = text.parse::<Quantity>() else {
            panic!("{text} is not a length");
        };
        let px = length.absolute_px().unwrap();
        assert!((px - expected).abs() < 1e-9, "{text}: {px} != {expected}");
    }
}

#[test]
fn test_relative_length_table() {
    let context = context();
    let cases = [
        (Length::new(2.0, LengthUnit::Em), 20.0),
        (Length::new(2.0, LengthUnit::Rem), 32.0),
        (Length::new(2.0, LengthUnit::Ex), 10.0),
        (Length::new(2.0, LengthUnit::Ch), 10.0),
        (Length::new(10.0, LengthUnit::Vw), 120.0),
        (Length::new(10.0, LengthUnit::Vh), 80.0),
        (Length::new(10.0, LengthUnit::Vmin), 80.0),
        (Length::new(10.0, LengthUnit::Vmax), 120.0),
    ];
    for (length, expected) in cases {
        assert!(length.is_relative());
        assert_eq!(length.absolute_px(), None);
        assert_eq!(length.to_px(&context), expected, "{length}");
    }
}

#[test]
fn test_other_dimension_tables() {
    assert_eq!(Angle::new(100.0, AngleUnit::Grad).to_degrees(), 90.0);
    assert!((Angle::new(std::f64::consts::PI, AngleUnit::Rad).to_degrees() - 180.0).abs() < 1e-9);
    assert_eq!(Time::new(1500.0, TimeUnit::Ms).to_seconds(), 1.5);
    assert_eq!(Frequency::new(2.5, FrequencyUnit::Khz).to_hertz(), 2500.0);
}

#[test]
fn test_quantity_kinds() {
    assert_eq!("1px".parse::<Quantity>().unwrap().kind(), QuantityKind::Length);
    assert_eq!("1rad".parse::<Quantity>().unwrap().kind(), QuantityKind::Angle);
    assert_eq!("1hz".parse::<Quantity>().unwrap().kind(), QuantityKind::Frequency);
    assert_eq!("1".parse::<Quantity>().unwrap().kind(), QuantityKind::Number);
    assert!(QuantityKind::Time.is_dimension());
    assert!(!QuantityKind::Percentage.is_dimension());
}

#[test]
fn test_serialization_of_simple_values() {
    assert_eq!(StyleValue::length(Length::new(1.5, LengthUnit::Em)).to_string(), "1.5em");
    assert_eq!(StyleValue::Percentage(Percentage(33.5)).to_string(), "33.5%");
    assert_eq!(StyleValue::Time(Time::new(200.0, TimeUnit::Ms)).to_string(), "200ms");
    assert_eq!(StyleValue::color(ColorValue::WHITE).to_string(), "rgb(255, 255, 255)");
    assert_eq!(StyleValue::identifier("Block").to_string(), "block");
    assert_eq!(StyleValue::inherit().to_string(), "inherit");
    assert_eq!(StyleValue::initial().to_string(), "initial");
    assert_eq!(StyleValue::unset().to_string(), "unset");
}

#[test]
fn test_serialization_of_shorthands() {
    let border = StyleValue::Border(BorderStyleValue {
        width: StyleValue::length(Length::px(1.0)),
        style: StyleValue::identifier("solid"),
        color: StyleValue::color(ColorValue::BLACK),
    });
    assert_eq!(border.to_string(), "1px solid rgb(0, 0, 0)");

    let list_style = StyleValue::ListStyle(ListStyleStyleValue {
        position: StyleValue::identifier("outside"),
        image: StyleValue::identifier("none"),
        style_type: StyleValue::identifier("disc"),
    });
    assert_eq!(list_style.to_string(), "outside none disc");

    let fonts = StyleValue::ValueList(StyleValueList::new(
        vec![
            Arc::new(StyleValue::String("Helvetica Neue".to_string())),
            StyleValue::identifier("sans-serif"),
        ],
        ValueSeparator::Comma,
    ));
    assert_eq!(fonts.to_string(), "\"Helvetica Neue\", sans-serif");
}

#[test]
fn test_calculated_style_value_serialization() {
    let calc = CalculatedStyleValue::create(
        CalcSum::leaf("100%".parse().unwrap()).minus(CalcProduct::leaf("2em".parse().unwrap())),
    )
    .unwrap();
    assert_eq!(StyleValue::Calculated(calc).to_string(), "calc(100% - 2em)");
}

#[test]
fn test_absolutized_border_radius() {
    let radius = Arc::new(StyleValue::BorderRadius(BorderRadiusStyleValue::new(
        LengthPercentage::Length(Length::new(1.0, LengthUnit::Em)),
        LengthPercentage::Percentage(Percentage(10.0)),
    )));
    let absolute = radius.absolutized(&context());
    assert_eq!(absolute.to_string(), "10px / 10%");

    let percentages = Arc::new(StyleValue::BorderRadius(BorderRadiusStyleValue::circular(
        LengthPercentage::Percentage(Percentage(50.0)),
    )));
    assert!(Arc::ptr_eq(&percentages.absolutized(&context()), &percentages));
}

#[test]
fn test_absolutized_values_that_never_change() {
    let keyword = StyleValue::identifier("auto");
    assert!(Arc::ptr_eq(&keyword.absolutized(&context()), &keyword));
    let zero = StyleValue::length(Length::new(0.0, LengthUnit::Em));
    assert!(Arc::ptr_eq(
        &zero.absolutized(&context()),
        &StyleValue::length(Length::px(0.0))
    ));
}

#[test]
fn test_style_value_json_shape() {
    let value = StyleValue::Length(Length::new(2.0, LengthUnit::Rem));
    let json = serde_json::to_value(&value).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "type": "length", "value": { "value": 2.0, "unit": "rem" } })
    );
    let back: StyleValue = serde_json::from_value(json).unwrap();
    assert_eq!(back, value);

    let keyword: StyleValue = serde_json::from_str(r#"{ "type": "inherit" }"#).unwrap();
    assert_eq!(keyword, StyleValue::Inherit);
}

#[test]
fn test_structural_equality() {
    assert_eq!(
        *StyleValue::length(Length::px(4.0)),
        *StyleValue::length(Length::px(4.0))
    );
    assert_ne!(
        *StyleValue::length(Length::px(4.0)),
        *StyleValue::length(Length::new(4.0, LengthUnit::Pt))
    );
    assert_ne!(
        StyleValue::Angle(Angle::degrees(1.0)),
        StyleValue::Frequency(Frequency::hertz(1.0))
    );
}

#[test]
fn test_transformation_json() {
    let json = serde_json::json!({
        "type": "transformation",
        "value": {
            "function": "rotate",
            "values": [ { "type": "angle", "value": { "value": 45.0, "unit": "deg" } } ]
        }
    });
    let value: StyleValue = serde_json::from_value(json.clone()).unwrap();
    assert_eq!(value.to_string(), "rotate(45deg)");
    let expected = StyleValue::Transformation(
        TransformationStyleValue::new(TransformFunction::Rotate, vec![Arc::new(
            StyleValue::Angle(Angle::degrees(45.0)),
        )])
        .unwrap(),
    );
    assert_eq!(value, expected);
    assert_eq!(serde_json::to_value(&expected).unwrap(), json);

    let too_many = serde_json::json!({
        "type": "transformation",
        "value": { "function": "translateX", "values": [
            { "type": "length", "value": { "value": 1.0, "unit": "px" } },
            { "type": "length", "value": { "value": 2.0, "unit": "px" } }
        ] }
    });
    assert!(serde_json::from_value::<StyleValue>(too_many).is_err());
}

#[test]
fn test_filter_value_list_json() {
    let json = r#"{
        "type": "filter-value-list",
        "value": [
            { "function": "blur", "radius": { "value": 3.0, "unit": "px" } },
            { "function": "color", "operation": "sepia", "amount": { "percentage": 25.0 } },
            { "function": "hue-rotate" }
        ]
    }"#;
    let value: StyleValue = serde_json::from_str(json).unwrap();
    assert_eq!(value.to_string(), "blur(3px) sepia(25%) hue-rotate()");
    assert_eq!(
        value,
        StyleValue::FilterValueList(FilterValueListStyleValue(vec![
            FilterFunction::Blur {
                radius: Some(Length::px(3.0)),
            },
            FilterFunction::Color {
                operation: ColorFilterOperation::Sepia,
                amount: Some(NumberPercentage::Percentage(Percentage(25.0))),
            },
            FilterFunction::HueRotate { angle: None },
        ]))
    );
    assert_ne!(
        value,
        StyleValue::FilterValueList(FilterValueListStyleValue(Vec::new()))
    );
}

#[test]
fn test_radial_gradient_json() {
    let json = r##"{
        "type": "radial-gradient",
        "value": {
            "ending_shape": "ellipse",
            "size": { "extent": "closest-side" },
            "color_stops": [ { "color": "#000000" }, { "color": "#ffffff" } ],
            "repeating": true
        }
    }"##;
    let value: StyleValue = serde_json::from_str(json).unwrap();
    assert_eq!(
        value.to_string(),
        "repeating-radial-gradient(ellipse closest-side, rgb(0, 0, 0), rgb(255, 255, 255))"
    );
    let StyleValue::RadialGradient(gradient) = &value else {
        panic!("expected a radial gradient, got {value:?}");
    };
    assert_eq!(gradient.ending_shape, EndingShape::Ellipse);
    assert_eq!(gradient.size, RadialSize::Extent(RadialExtent::ClosestSide));
    assert_eq!(gradient.position, PositionValue::CENTER);

    let back: StyleValue =
        serde_json::from_value(serde_json::to_value(&value).unwrap()).unwrap();
    assert_eq!(back, value);
    let circle = StyleValue::RadialGradient(RadialGradientStyleValue {
        ending_shape: EndingShape::Circle,
        ..gradient.clone()
    });
    assert_ne!(circle, value);
}
