//! Plain-text rendering of the core view types.

use countrydex_core::display::or_placeholder;
use countrydex_core::{CatalogStats, CountryDetail, PageView, WeatherStatus};
use std::io::{self, Write};

pub fn page(out: &mut impl Write, view: &PageView) -> io::Result<()> {
    for card in &view.cards {
        writeln!(
            out,
            "{:<4} {:<32} {:<10} {:<20} {:>15}",
            card.id, card.name, card.region, card.capital, card.population
        )?;
    }
    writeln!(out)?;
    writeln!(out, "{}", view.summary)?;
    if !view.labels.is_empty() {
        let strip: Vec<String> = view
            .labels
            .iter()
            .map(|label| match label {
                countrydex_core::PageLabel::Page(n) if *n == view.current_page => format!("[{n}]"),
                other => other.to_string(),
            })
            .collect();
        let prev = if view.has_previous { "<" } else { " " };
        let next = if view.has_next { ">" } else { " " };
        writeln!(out, "{prev} {} {next}", strip.join(" "))?;
    }
    Ok(())
}

pub fn detail(out: &mut impl Write, d: &CountryDetail) -> io::Result<()> {
    writeln!(out, "{} ({})", d.card.name, d.card.id)?;
    writeln!(out, "  {}", d.official_name)?;
    writeln!(out, "Native:      {}", d.native_name)?;
    writeln!(out, "Currency:    {}", d.currency)?;
    writeln!(out, "Region:      {}", d.card.region)?;
    writeln!(out, "Subregion:   {}", d.subregion)?;
    writeln!(out, "Capital:     {}", d.card.capital)?;
    writeln!(out, "Population:  {}", d.card.population)?;
    writeln!(out, "Borders:     {}", d.borders)?;
    writeln!(out, "Coordinates: {}", d.coordinates)?;
    writeln!(out, "Flag:        {}", or_placeholder(d.card.flag_url.as_deref()))?;
    match &d.weather {
        Some(WeatherStatus::Available { report }) => {
            writeln!(out, "Weather:     {}", report.condition)?;
            writeln!(
                out,
                "             {}{}, humidity {}%",
                report.temperature, report.temperature_unit, report.relative_humidity
            )?;
        }
        Some(WeatherStatus::Unavailable { reason }) => {
            writeln!(out, "Weather:     unavailable ({reason})")?;
        }
        None => {}
    }
    Ok(())
}

pub fn stats(out: &mut impl Write, s: &CatalogStats) -> io::Result<()> {
    writeln!(out, "Catalog statistics:")?;
    writeln!(out, "  Countries: {}", s.countries)?;
    writeln!(out, "  Regions:")?;
    for (region, count) in &s.regions {
        writeln!(out, "    {region:<12} {count}")?;
    }
    Ok(())
}
