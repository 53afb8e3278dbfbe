//! Printing of models and default discretizations for the plumbum CLI

mod defaults;
mod model;

use anstream::println;
use plumbum::LeadAcidModel;

/// Prints the assembled model in a hierarchical tree format
pub fn print_model(model: &LeadAcidModel, print_debug: bool) {
    if print_debug {
        println!("Model: {:?}", model.model());
    } else {
        model::print(model);
    }
}

/// Prints the default discretization in a hierarchical tree format
pub fn print_defaults(model: &LeadAcidModel, print_debug: bool) {
    if print_debug {
        println!("Defaults: {:?}", model.default_discretization());
    } else {
        defaults::print(model);
    }
}

/// Returns the tree branch drawn in front of item `index` of `len` items.
const fn branch(index: usize, len: usize) -> &'static str {
    if index + 1 == len { "└──" } else { "├──" }
}

/// Returns the prefix continuing a branch below an item.
const fn continuation(is_last: bool) -> &'static str {
    if is_last { "    " } else { "│   " }
}
