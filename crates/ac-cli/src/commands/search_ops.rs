use std::path::Path;

use autocomplete::AutocompleteService;

use crate::die;
use crate::output::{render_json, render_table};
use crate::setup::build_service;

pub struct SearchArgs<'a> {
    pub prefix: &'a str,
    pub limit: Option<usize>,
    pub select: &'a [String],
    pub config: Option<&'a Path>,
    pub vocab: Option<&'a Path>,
    pub json: bool,
}

/// One-shot search, optionally after recording some selections.
pub fn search(args: SearchArgs<'_>) {
    let svc = die!(build_service(args.config, args.vocab), "Error: {}");
    for word in args.select {
        die!(svc.record_selection(word), "Error: {}");
    }
    let limit = args.limit.unwrap_or(svc.config().search.max_results);
    let found = die!(svc.search(args.prefix, limit), "Error: {}");
    if args.json {
        println!("{}", die!(render_json(&found), "Error: {}"));
    } else {
        print!("{}", render_table(&found));
    }
}
