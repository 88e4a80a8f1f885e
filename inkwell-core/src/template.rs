use std::collections::HashMap;

use tera::{Tera, Value};

use crate::date::{INVALID_DATE, format_date};

/// Make the site's helpers available to templates.
pub fn register_filters(tera: &mut Tera) {
    tera.register_filter("format_date", format_date_filter);
}

/// `{{ page.date | format_date }}`
///
/// Anything that isn't a string (a missing front matter field renders as
/// null) becomes the invalid-date label rather than a template error.
pub fn format_date_filter(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    let label = match value.as_str() {
        Some(s) => format_date(s),
        None => INVALID_DATE.to_string(),
    };

    Ok(Value::String(label))
}
