//! Explicit per-aggregate validation, invoked by handlers before any
//! persistence call. Each function collects every violation rather than
//! stopping at the first, so clients can redisplay a full form.

use common::model::order::TacoOrder;
use common::model::run::Run;
use common::model::taco::Taco;
use common::model::violation::Violation;
use regex::Regex;

/// Minimum taco name length, in characters.
const MIN_TACO_NAME_LEN: usize = 5;

/// Validates a complete order aggregate: delivery fields, payment fields,
/// and every taco in sequence. Taco violations are reported with an indexed
/// field path such as `tacos[1].name`.
pub fn validate_order(order: &TacoOrder) -> Vec<Violation> {
    let mut violations = Vec::new();

    require(&mut violations, "delivery_name", &order.delivery_name, "Delivery name is required");
    require(&mut violations, "delivery_street", &order.delivery_street, "Street is required");
    require(&mut violations, "delivery_city", &order.delivery_city, "City is required");
    require(&mut violations, "delivery_state", &order.delivery_state, "State is required");
    require(&mut violations, "delivery_zip", &order.delivery_zip, "Zip code is required");

    if !luhn_valid(&order.cc_number) {
        violations.push(Violation::new("cc_number", "Not a valid credit card number"));
    }
    if !matches_pattern(r"^(0[1-9]|1[0-2])/([2-9][0-9])$", &order.cc_expiration) {
        violations.push(Violation::new("cc_expiration", "Must be formatted MM/YY"));
    }
    if !matches_pattern(r"^[0-9]{3}$", &order.cc_cvv) {
        violations.push(Violation::new("cc_cvv", "Invalid CVV"));
    }

    if order.tacos.is_empty() {
        violations.push(Violation::new("tacos", "An order must contain at least one taco"));
    }
    for (index, taco) in order.tacos.iter().enumerate() {
        for v in validate_taco(taco) {
            violations.push(Violation::new(format!("tacos[{index}].{}", v.field), v.message));
        }
    }

    violations
}

/// Validates a single taco: name length and at least one ingredient.
pub fn validate_taco(taco: &Taco) -> Vec<Violation> {
    let mut violations = Vec::new();

    if taco.name.trim().is_empty() {
        violations.push(Violation::new("name", "Taco name is required"));
    } else if taco.name.chars().count() < MIN_TACO_NAME_LEN {
        violations.push(Violation::new("name", "Name must be at least 5 characters long"));
    }

    if taco.ingredients.is_empty() {
        violations.push(Violation::new("ingredients", "You must choose at least 1 ingredient"));
    }

    violations
}

/// Validates a run: non-empty title, positive mileage, and a completion
/// time strictly after the start time.
pub fn validate_run(run: &Run) -> Vec<Violation> {
    let mut violations = Vec::new();

    if run.title.trim().is_empty() {
        violations.push(Violation::new("title", "Title is required"));
    }
    if run.miles <= 0 {
        violations.push(Violation::new("miles", "Miles must be positive"));
    }
    if run.completed_on <= run.started_on {
        violations.push(Violation::new("completed_on", "Completed On must be after Started On"));
    }

    violations
}

fn require(violations: &mut Vec<Violation>, field: &str, value: &str, message: &str) {
    if value.trim().is_empty() {
        violations.push(Violation::new(field, message));
    }
}

fn matches_pattern(pattern: &str, value: &str) -> bool {
    Regex::new(pattern).map_or(false, |re| re.is_match(value))
}

/// Luhn checksum over a card number; spaces and hyphens are tolerated,
/// anything else non-numeric fails.
fn luhn_valid(number: &str) -> bool {
    let digits: Option<Vec<u32>> = number
        .chars()
        .filter(|c| *c != ' ' && *c != '-')
        .map(|c| c.to_digit(10))
        .collect();

    let digits = match digits {
        Some(d) if (12..=19).contains(&d.len()) => d,
        _ => return false,
    };

    let sum: u32 = digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| {
            if i % 2 == 1 {
                let doubled = d * 2;
                if doubled > 9 { doubled - 9 } else { doubled }
            } else {
                d
            }
        })
        .sum();

    sum % 10 == 0
}
