use regex::Regex;
use serde_json::{json, Value};

use crate::{
    domain::{types::ViableEnclosure, AllocationError, Allocator},
    port::catalog::Catalog,
};

lazy_static::lazy_static! {
    static ref INTEGRAL: Regex = Regex::new(r"^(-)?(\d+)(\.0+)?$").unwrap();
}

/// A placement request as it arrives from a host: `{"animal": "MACACO", "quantity": 2}`.
#[derive(Debug, PartialEq, Eq)]
pub struct Request {
    pub animal: Option<String>,
    pub quantity: i64,
}

impl Request {
    pub fn from_json(val: &Value) -> Self {
        let animal = val["animal"].as_str().map(str::to_string);

        // Anything that is not an integral number is swapped out for 0,
        // which the allocator rejects as an invalid quantity.
        let quantity = get_quantity(&val["quantity"]).unwrap_or(0);

        Request { animal, quantity }
    }

    pub fn evaluate<C: Catalog>(
        &self,
        allocator: &Allocator<C>,
    ) -> Result<Vec<ViableEnclosure>, AllocationError> {
        match &self.animal {
            Some(animal) => allocator.evaluate(animal, self.quantity),
            None => Err(AllocationError::InvalidSpecies),
        }
    }
}

fn get_quantity(val: &Value) -> Option<i64> {
    let n = match val {
        Value::Number(n) => n,
        _ => return None,
    };

    // The number keeps its textual form, so "2.0" is accepted and "2.5" is not.
    let num = n.to_string();
    let Some(capt) = INTEGRAL.captures(&num) else {
        // exponent notation, e.g. "1e0" or "20e-1"
        return n
            .as_f64()
            .filter(|f| f.is_finite() && f.fract() == 0.0)
            .map(|f| f as i64);
    };
    let magnitude = capt[2].parse::<i64>().unwrap_or(i64::MAX);
    Some(if capt.get(1).is_some() {
        -magnitude
    } else {
        magnitude
    })
}

/// `{"viableEnclosures": [...]}` on success, `{"error": ...}` otherwise.
pub fn render(result: &Result<Vec<ViableEnclosure>, AllocationError>) -> Value {
    match result {
        Ok(viable) => json!({
            "viableEnclosures": viable.iter().map(ToString::to_string).collect::<Vec<_>>()
        }),
        Err(e) => json!({ "error": e.to_string() }),
    }
}

pub fn handle_request<C: Catalog>(allocator: &Allocator<C>, val: &Value) -> Value {
    let request = Request::from_json(val);
    log::debug!("--> {request:?}");
    let response = render(&request.evaluate(allocator));
    log::debug!("<-- {response}");
    response
}
