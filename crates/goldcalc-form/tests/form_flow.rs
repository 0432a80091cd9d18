// End-to-end form tests: typed text in, formatted receipt out
//
// Properties tested:
// 1. a masked gold price reads back as the typed number
// 2. Persian, Arabic-Indic and ASCII spellings give the same snapshot
// 3. the receipt total is the formatted engine result

use std::sync::Arc;

use goldcalc_form::{format_toman, to_persian_digits, Field, GoldForm, Receipt};
use goldcalc_pricing::{compute_price, PricingService};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn form() -> GoldForm {
    GoldForm::new(Arc::new(PricingService::default()))
}

fn to_arabic_digits(text: &str) -> String {
    text.chars()
        .map(|c| match c.to_digit(10) {
            Some(d) if c.is_ascii_digit() => char::from_u32(0x0660 + d).unwrap(),
            _ => c,
        })
        .collect()
}

#[test]
fn test_reference_receipt() {
    let mut form = form();
    form.edit(Field::GoldPricePerGram, "1000000").unwrap();
    form.edit(Field::Weight, "1").unwrap();
    form.edit(Field::ManufFeePercent, "10").unwrap();

    let receipt = form.receipt();
    let amounts: Vec<_> = receipt.rows().iter().map(|row| row.formatted.as_str()).collect();
    assert_eq!(
        amounts,
        vec![
            "۱٬۰۰۰٬۰۰۰ تومان",
            "۱۰۰٬۰۰۰ تومان",
            "۷۷٬۰۰۰ تومان",
            "۱٬۱۷۷٬۰۰۰ تومان",
            "۱۷٬۷۰۰ تومان",
            "۱٬۱۹۴٬۷۰۰ تومان",
        ]
    );
}

#[test]
fn test_prompt_until_required_fields() {
    let mut form = form();
    assert_eq!(form.receipt(), Receipt::Prompt);

    form.edit(Field::Weight, "5").unwrap();
    assert_eq!(form.receipt(), Receipt::Prompt);

    form.edit(Field::GoldPricePerGram, "0").unwrap();
    assert_eq!(form.receipt(), Receipt::Prompt);

    form.edit(Field::GoldPricePerGram, "500000").unwrap();
    assert!(matches!(form.receipt(), Receipt::Itemized(_)));
}

#[test]
fn test_out_of_range_receipt_serializes() {
    let mut form = form();
    form.edit(Field::GoldPricePerGram, "۱۰۰۰۰۰۰۰۰۰۰۰۰۰۰۰۰۰۰").unwrap();
    form.edit(Field::Weight, "1000000000000").unwrap();

    let json = serde_json::to_value(form.receipt()).unwrap();
    assert_eq!(json["kind"], "out_of_range");
}

#[test]
fn test_receipt_serializes() {
    let mut form = form();
    form.edit(Field::GoldPricePerGram, "500000").unwrap();
    form.edit(Field::Weight, "2").unwrap();
    form.clear(Field::SellerProfitPercent);
    form.clear(Field::VatPercent);

    let json = serde_json::to_value(form.receipt()).unwrap();
    assert_eq!(json["kind"], "itemized");
    assert_eq!(json["rows"][5]["item"], "final");
    let amount: Decimal = json["rows"][5]["amount"].as_str().unwrap().parse().unwrap();
    assert_eq!(amount, dec!(1000000));
}

proptest! {
    #[test]
    fn test_gold_price_round_trips_through_mask(price in 1u64..=1_000_000_000_000u64) {
        let mut form = form();
        form.edit(Field::GoldPricePerGram, &price.to_string()).unwrap();
        prop_assert_eq!(form.snapshot().gold_price_per_gram, Decimal::from(price));
    }

    #[test]
    fn test_digit_scripts_agree(whole in 0u32..100_000, frac in 0u32..1000) {
        let ascii = format!("{}.{:03}", whole, frac);
        let mut snapshots = Vec::new();
        for text in [ascii.clone(), to_persian_digits(&ascii), to_arabic_digits(&ascii)] {
            let mut form = form();
            form.edit(Field::Weight, &text).unwrap();
            snapshots.push(form.snapshot());
        }
        prop_assert_eq!(snapshots[0], snapshots[1]);
        prop_assert_eq!(snapshots[0], snapshots[2]);
    }

    #[test]
    fn test_total_matches_engine(price in 1u64..=10_000_000u64, grams in 1u32..=100_000u32, fee in 0u32..=40u32) {
        let mut form = form();
        form.edit(Field::GoldPricePerGram, &price.to_string()).unwrap();
        form.edit(Field::Weight, &format!("{}", Decimal::new(grams.into(), 3))).unwrap();
        form.edit(Field::ManufFeePercent, &fee.to_string()).unwrap();

        let expected = compute_price(&form.snapshot()).unwrap();
        let receipt = form.receipt();
        let total = receipt.total().unwrap();
        prop_assert_eq!(total.amount, expected.final_price);
        prop_assert_eq!(&total.formatted, &format_toman(expected.final_price));
        prop_assert!(total.amount >= dec!(0));
    }
}
