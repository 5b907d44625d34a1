//! Record template rendering
//!
//! Templates reference record fields as `{field_name}`. Literal braces are
//! written `{{` and `}}`.

use crate::domain::errors::TaggerError;
use crate::domain::result::Result;
use std::collections::BTreeMap;
use thiserror::Error;

/// Value substituted for a field the record does not provide
pub const PLACEHOLDER: &str = "PLACEHOLDER";

/// Template rendering errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// Placeholder names a field absent from the record
    #[error("Missing field '{0}'")]
    MissingField(String),

    /// Brace without a partner
    #[error("Unbalanced '{brace}' at offset {offset}")]
    UnbalancedBrace { brace: char, offset: usize },

    /// `{}` with no field name
    #[error("Empty placeholder at offset {0}")]
    EmptyPlaceholder(usize),
}

impl From<RenderError> for TaggerError {
    fn from(err: RenderError) -> Self {
        TaggerError::Template(err.to_string())
    }
}

/// Substitute every `{field}` placeholder from `fields`
pub fn render_template(
    template: &str,
    fields: &BTreeMap<String, String>,
) -> std::result::Result<String, RenderError> {
    let mut output = String::with_capacity(template.len());
    let mut chars = template.char_indices().peekable();

    while let Some((offset, c)) = chars.next() {
        match c {
            '{' if chars.peek().map(|&(_, next)| next) == Some('{') => {
                chars.next();
                output.push('{');
            }
            '{' => {
                let mut name = String::new();
                let mut closed = false;
                for (_, inner) in chars.by_ref() {
                    match inner {
                        '}' => {
                            closed = true;
                            break;
                        }
                        '{' => return Err(RenderError::UnbalancedBrace { brace: '{', offset }),
                        other => name.push(other),
                    }
                }
                if !closed {
                    return Err(RenderError::UnbalancedBrace { brace: '{', offset });
                }

                let name = name.trim();
                if name.is_empty() {
                    return Err(RenderError::EmptyPlaceholder(offset));
                }
                let value = fields
                    .get(name)
                    .ok_or_else(|| RenderError::MissingField(name.to_string()))?;
                output.push_str(value);
            }
            '}' if chars.peek().map(|&(_, next)| next) == Some('}') => {
                chars.next();
                output.push('}');
            }
            '}' => return Err(RenderError::UnbalancedBrace { brace: '}', offset }),
            other => output.push(other),
        }
    }

    Ok(output)
}

/// Render a template, filling one missing field with [`PLACEHOLDER`]
///
/// On a missing field the sentinel is substituted for that field and rendering
/// is retried once. A second missing field, or any other error, is returned as
/// [`TaggerError::Template`].
pub fn render_with_fallback(template: &str, fields: &BTreeMap<String, String>) -> Result<String> {
    match render_template(template, fields) {
        Ok(rendered) => Ok(rendered),
        Err(RenderError::MissingField(missing)) => {
            crate::log_template_fallback!(&missing);
            let mut patched = fields.clone();
            patched.insert(missing, PLACEHOLDER.to_string());
            Ok(render_template(template, &patched)?)
        }
        Err(err) => Err(err.into()),
    }
}
