use anstream::println;
use owo_colors::OwoColorize;
use plumbum::LeadAcidModel;
use plumbum_discretization::RegionGeometry;

use super::{branch, continuation};
use crate::stylesheet;

pub fn print(model: &LeadAcidModel) {
    println!(
        "{} ({}, dimensionality {})",
        "Default discretization".style(stylesheet::SECTION_HEADER),
        model.base(),
        model.options().dimensionality()
    );

    // geometry
    println!("├── {}:", "Geometry".style(stylesheet::SECTION_HEADER));
    let geometry = model.default_geometry().iter().collect::<Vec<_>>();
    for (i, (region, region_geometry)) in geometry.iter().enumerate() {
        let is_last = i + 1 == geometry.len();
        println!("│   {} {region}", branch(i, geometry.len()));
        print_region_geometry(region_geometry, &format!("│   {}", continuation(is_last)));
    }

    // spatial methods and submeshes
    println!("├── {}:", "Spatial methods".style(stylesheet::SECTION_HEADER));
    let methods = model.default_spatial_methods();
    for (i, (region, method)) in methods.iter().enumerate() {
        println!("│   {} {region}: {method}", branch(i, methods.len()));
    }

    println!("├── {}:", "Submesh types".style(stylesheet::SECTION_HEADER));
    let submeshes = model.default_submesh_types();
    for (i, (region, submesh)) in submeshes.iter().enumerate() {
        println!("│   {} {region}: {submesh}", branch(i, submeshes.len()));
    }

    // points
    println!("└── {}:", "Points".style(stylesheet::SECTION_HEADER));
    let var_pts = model.default_var_pts();
    for (i, (coordinate, points)) in var_pts.iter().enumerate() {
        println!("    {} {coordinate}: {points}", branch(i, var_pts.len()));
    }
}

fn print_region_geometry(geometry: &RegionGeometry, indent: &str) {
    let intervals = geometry.iter().collect::<Vec<_>>();
    let tabs = geometry.tabs();

    if intervals.is_empty() {
        println!("{indent}└── point");
        return;
    }

    for (i, (coordinate, interval)) in intervals.iter().enumerate() {
        let is_last = i + 1 == intervals.len() && tabs.is_none();
        let prefix = if is_last { "└──" } else { "├──" };
        println!("{indent}{prefix} {coordinate} in {interval}");
    }

    if let Some(tabs) = tabs {
        println!("{indent}├── negative tab: {}", tabs.negative);
        println!("{indent}└── positive tab: {}", tabs.positive);
    }
}
