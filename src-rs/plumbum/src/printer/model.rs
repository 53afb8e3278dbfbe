use std::fmt::Display;

use anstream::println;
use owo_colors::OwoColorize;
use plumbum::LeadAcidModel;

use super::{branch, continuation};
use crate::stylesheet;

pub fn print(model: &LeadAcidModel) {
    let options = model.options();
    let assembled = model.model();

    println!(
        "{} ({})",
        "Lead-acid model".style(stylesheet::SECTION_HEADER),
        model.base()
    );

    let options = options.to_string();
    print_section("Options", options.lines(), false);

    let variables = assembled
        .variables()
        .values()
        .map(|variable| {
            format!(
                "{} on {}",
                variable.name().style(stylesheet::VARIABLE_NAME),
                variable.domain()
            )
        })
        .collect::<Vec<_>>();
    print_section("Variables", variables, false);

    let equations = assembled
        .equations()
        .iter()
        .map(|equation| {
            format!(
                "[{}] {equation}",
                equation.kind().style(stylesheet::EQUATION_KIND)
            )
        })
        .collect::<Vec<_>>();
    print_section("Equations", equations, false);

    let boundary_conditions = assembled
        .boundary_conditions()
        .iter()
        .map(|condition| {
            format!(
                "{}: {condition}",
                condition.variable().style(stylesheet::VARIABLE_NAME)
            )
        })
        .collect::<Vec<_>>();
    print_section("Boundary conditions", boundary_conditions, false);

    print_section("Initial conditions", assembled.initial_conditions(), false);

    let parameters = assembled
        .parameters()
        .values()
        .map(|parameter| format!("{}: {}", parameter.name(), parameter.description()))
        .collect::<Vec<_>>();
    print_section("Parameters", parameters, false);

    let outputs = assembled.outputs().keys().collect::<Vec<_>>();
    print_section("Outputs", outputs, true);
}

fn print_section<I>(title: &str, items: I, is_last: bool)
where
    I: IntoIterator,
    I::Item: Display,
{
    let items = items.into_iter().collect::<Vec<_>>();
    let prefix = if is_last { "└──" } else { "├──" };
    let indent = continuation(is_last);

    println!("{prefix} {}:", title.style(stylesheet::SECTION_HEADER));

    if items.is_empty() {
        println!("{indent}└── [none]");
        return;
    }

    for (i, item) in items.iter().enumerate() {
        println!("{indent}{} {item}", branch(i, items.len()));
    }
}
