use serde_json::Value;

/// JSON type a payload field must carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    String,
    Integer,
}

impl FieldType {
    fn name(self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Integer => "integer",
        }
    }

    fn matches(self, value: &Value) -> bool {
        match self {
            FieldType::String => value.is_string(),
            FieldType::Integer => as_integer(value).is_some(),
        }
    }
}

/// Reads a JSON number as the integer the book columns store. Integral floats
/// count: a JSON `100.0` is an integer. Numbers outside the stored 32-bit
/// range fail the type check.
pub fn as_integer(value: &Value) -> Option<i32> {
    let Value::Number(number) = value else {
        return None;
    };
    let integral = match number.as_i64() {
        Some(integral) => integral,
        // Float-backed and u64-backed numbers; the cast saturates, so
        // anything oversized falls out at the i32 conversion.
        None => match number.as_f64() {
            Some(f) if f.fract() == 0.0 => f as i64,
            _ => return None,
        },
    };
    i32::try_from(integral).ok()
}

/// Declarative shape of one payload field.
#[derive(Debug)]
pub struct FieldRule {
    name: &'static str,
    ty: FieldType,
    required: bool,
    minimum: Option<i64>,
}

impl FieldRule {
    pub const fn required(name: &'static str, ty: FieldType) -> Self {
        Self {
            name,
            ty,
            required: true,
            minimum: None,
        }
    }

    pub const fn with_minimum(mut self, minimum: i64) -> Self {
        self.minimum = Some(minimum);
        self
    }
}

/// Validates `instance` against the rule set, accumulating every violation in
/// one pass. Required-property violations come first, then per-field type and
/// range violations; each group follows rule declaration order. An empty
/// result means the payload is valid.
pub fn validate(rules: &[FieldRule], instance: &Value) -> Vec<String> {
    let mut messages = Vec::new();
    for rule in rules {
        if rule.required && instance.get(rule.name).is_none() {
            messages.push(format!("instance requires property \"{}\"", rule.name));
        }
    }
    for rule in rules {
        let Some(value) = instance.get(rule.name) else {
            continue;
        };
        if !rule.ty.matches(value) {
            messages.push(format!(
                "instance.{} is not of a type(s) {}",
                rule.name,
                rule.ty.name()
            ));
        }
        // The range check is independent of the type check: it applies to any
        // numeric value, and never to non-numbers.
        if let Some(minimum) = rule.minimum {
            if let Value::Number(number) = value {
                if number.as_f64().is_some_and(|f| f < minimum as f64) {
                    messages.push(format!(
                        "instance.{} must be greater than or equal to {}",
                        rule.name, minimum
                    ));
                }
            }
        }
    }
    messages
}
