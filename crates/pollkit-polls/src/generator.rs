//! Poll request generation.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::catalog::{Account, Catalog};
use crate::error::{Error, Result};

const USER3_PLACEHOLDER: &str = "{user3}";

/// What kind of poll request to generate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollSpec {
    /// Preferred category; ignored when the catalog does not have it
    pub category: Option<String>,
    /// Number of accounts to put in the poll
    pub options: usize,
}

impl Default for PollSpec {
    fn default() -> Self {
        Self {
            category: None,
            options: 2,
        }
    }
}

/// Generate one poll request.
///
/// The option count is clamped to the size of the chosen category. Two-option
/// polls only use templates without `{user3}`.
pub fn generate<R: Rng + ?Sized>(catalog: &Catalog, spec: &PollSpec, rng: &mut R) -> Result<String> {
    if spec.options < 2 {
        return Err(Error::InvalidOptionCount(spec.options));
    }

    let category = pick_category(catalog, spec.category.as_deref(), rng)?;
    let accounts = catalog.accounts(&category).unwrap_or_default();
    let options = spec.options.min(accounts.len());
    if options < 2 {
        return Err(Error::NotEnoughAccounts {
            category,
            available: accounts.len(),
        });
    }

    let handles: Vec<String> = accounts
        .choose_multiple(rng, options)
        .map(Account::handle)
        .collect();

    let eligible: Vec<&String> = catalog
        .poll_templates
        .iter()
        .filter(|t| options > 2 || !t.contains(USER3_PLACEHOLDER))
        .collect();
    let template = eligible
        .choose(rng)
        .ok_or(Error::NoTemplates { options })?;

    Ok(render(template, &category, &handles).trim().to_string())
}

/// Generate `count` poll requests with the same spec.
pub fn generate_batch<R: Rng + ?Sized>(
    catalog: &Catalog,
    spec: &PollSpec,
    count: usize,
    rng: &mut R,
) -> Result<Vec<String>> {
    (0..count).map(|_| generate(catalog, spec, rng)).collect()
}

fn pick_category<R: Rng + ?Sized>(
    catalog: &Catalog,
    requested: Option<&str>,
    rng: &mut R,
) -> Result<String> {
    if let Some(requested) = requested {
        if catalog.categories.contains_key(requested) {
            return Ok(requested.to_string());
        }
        tracing::warn!(category = requested, "unknown category, picking one at random");
    }

    catalog
        .known_categories()
        .choose(rng)
        .map(|c| c.to_string())
        .ok_or(Error::NoCategories)
}

/// Fill a template. `{user3}` falls back to the first account when only two
/// were sampled.
///
/// Placeholders are substituted in a single left-to-right pass, so text
/// coming from the catalog is never itself expanded. Unknown placeholders are
/// kept verbatim.
fn render(template: &str, category: &str, handles: &[String]) -> String {
    let category = category.replace('_', " ");
    let mut out = String::with_capacity(template.len() + 32);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let tail = &rest[open..];
        let Some(close) = tail.find('}') else {
            rest = tail;
            break;
        };
        if tail[1..close].contains('{') {
            out.push('{');
            rest = &tail[1..];
            continue;
        }
        let replacement = match &tail[1..close] {
            "category" => Some(category.as_str()),
            "user1" => handles.first().map(String::as_str),
            "user2" => handles.get(1).map(String::as_str),
            "user3" => handles.get(2).or(handles.first()).map(String::as_str),
            _ => None,
        };
        match replacement {
            Some(value) => out.push_str(value),
            None => out.push_str(&tail[..=close]),
        }
        rest = &tail[close + 1..];
    }

    // `rest` is either empty or starts at an unclosed `{`
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_two_options() {
        let handles = vec!["@a".to_string(), "@b".to_string()];
        assert_eq!(
            render("  {user1} or {user2}, best {category}?  ", "tool_creators", &handles),
            "  @a or @b, best tool creators?  "
        );
    }

    #[test]
    fn test_render_user3_falls_back_to_first() {
        let handles = vec!["@a".to_string(), "@b".to_string()];
        assert_eq!(render("{user1} {user2} {user3}", "x", &handles), "@a @b @a");
    }

    #[test]
    fn test_render_does_not_expand_substituted_text() {
        let handles = vec!["@{user2}".to_string(), "@b".to_string()];
        assert_eq!(render("{user1} vs {user2}", "x", &handles), "@{user2} vs @b");
    }

    #[test]
    fn test_render_keeps_unknown_and_unclosed_braces() {
        let handles = vec!["@a".to_string(), "@b".to_string()];
        assert_eq!(render("{other} {user1} {", "x", &handles), "{other} @a {");
        assert_eq!(render("{ {user2}", "x", &handles), "{ @b");
    }
}
