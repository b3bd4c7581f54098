use std::collections::HashMap;

use tera::{Context, Tera, Value};

use crate::error::ReportError;
use crate::format::escape_markdown;
use crate::view::ReportView;

const BUILTIN_NAME: &str = "report.md";
const BUILTIN_TEMPLATE: &str = include_str!("../templates/report.md.tera");

/// Render the report with the built-in Markdown template.
pub fn render_markdown(view: &ReportView) -> Result<String, ReportError> {
    render_with_template(BUILTIN_NAME, BUILTIN_TEMPLATE, view)
}

/// Render a Tera template with the report view as its context.
///
/// Top-level fields of [`ReportView`] become template variables; rendered
/// values carry a `kind` of `text`, `link`, `chips` or `cards`. The `md`
/// filter escapes answer text so it cannot turn into Markdown markup.
pub fn render_with_template(
    template_name: &str,
    template_content: &str,
    view: &ReportView,
) -> Result<String, ReportError> {
    let mut tera = Tera::default();
    tera.register_filter("md", md_filter);
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| ReportError::TemplateParse(e.to_string()))?;

    let value = serde_json::to_value(view)?;
    let context =
        Context::from_value(value).map_err(|e| ReportError::TemplateRender(e.to_string()))?;

    Ok(tera.render(template_name, &context)?)
}

fn md_filter(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    match value {
        Value::String(text) => Ok(Value::String(escape_markdown(text))),
        other => Ok(other.clone()),
    }
}
