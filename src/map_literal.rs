use crate::config::{DEFAULT_TEMPLATE, MAP_NAME};
use crate::instances::InstanceRecord;
use crate::prelude::*;
use handlebars::{no_escape, to_json, Handlebars};
use serde::Serialize;

#[derive(Serialize)]
struct MapLiteral<'a> {
    name: &'a str,
    instance_types: Vec<&'a str>,
}

/// Renders the Go map literal, one `"<type>": true,` line per record in input order.
pub fn render(records: &[InstanceRecord]) -> Result<String> {
    let data = MapLiteral {
        name: MAP_NAME,
        instance_types: records.iter().map(|r| r.instance_type.as_str()).collect(),
    };
    let mut hbs = Handlebars::new();
    hbs.register_escape_fn(no_escape);
    hbs.render_template(DEFAULT_TEMPLATE, &to_json(data))
        .context("can't render instance type map")
}
