//! Catalog listing command.

use anyhow::Result;
use shopfront_commerce::search::{result_summary, QueryCriteria};

use super::BrowseArgs;
use crate::context::Context;

/// Run the browse command.
pub fn run(args: BrowseArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.open_catalog()?;
    let criteria = criteria(args);
    ctx.output.debug(&format!(
        "category={} search={:?} sort={}",
        criteria.category, criteria.search_term, criteria.sort_order
    ));

    let visible = catalog.query(&criteria);

    if ctx.output.is_json() {
        ctx.output.json(&visible);
        return Ok(());
    }

    ctx.output.header(&result_summary(visible.len()));
    if visible.is_empty() {
        ctx.output.info("No products match the current filters.");
        return Ok(());
    }
    ctx.output.products(&visible);

    Ok(())
}

fn criteria(args: BrowseArgs) -> QueryCriteria {
    QueryCriteria::new()
        .with_search(args.search)
        .with_category(args.category)
        .with_sort(args.sort)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopfront_commerce::search::{CategoryFilter, SortOrder};

    #[test]
    fn test_default_args_are_default_criteria() {
        let args = BrowseArgs {
            search: String::new(),
            category: "all".to_string(),
            sort: SortOrder::Default,
        };
        assert!(criteria(args).is_default());
    }

    #[test]
    fn test_args_map_to_criteria() {
        let args = BrowseArgs {
            search: "mug".to_string(),
            category: "home".to_string(),
            sort: SortOrder::PriceDesc,
        };
        let criteria = criteria(args);
        assert_eq!(criteria.search_term, "mug");
        assert_eq!(criteria.category, CategoryFilter::Only("home".to_string()));
        assert_eq!(criteria.sort_order, SortOrder::PriceDesc);
    }
}
