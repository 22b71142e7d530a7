//! Output formatting module

use freight_app::market::MarketSnapshot;
use freight_domain::service::{CityMarket, GenerationReport};
use freight_domain::Catalog;
use freight_types::{JobOffer, JobType, OutputFormat, Result};

pub fn output_city(output_format: OutputFormat, market: &CityMarket, seed: u64) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(&serde_json::json!({
            "seed": seed,
            "offers": market.offers,
            "report": market.report,
        }))?;
        println!("{}", content);
        return Ok(());
    }

    println!("\nJob Offers: {}", market.report.city);
    println!("=================");
    if market.offers.is_empty() {
        println!("No offers generated.");
    } else {
        print!("{}", format_offer_table(&market.offers));
    }
    println!();
    print!("{}", format_report(&market.report));
    println!("Seed:            {}", seed);

    Ok(())
}

pub fn output_market(output_format: OutputFormat, snapshot: &MarketSnapshot) -> Result<()> {
    let summary = snapshot.summary();

    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(&serde_json::json!({
            "snapshot": snapshot,
            "summary": summary,
        }))?;
        println!("{}", content);
        return Ok(());
    }

    println!("\nMarket Summary");
    println!("==============");
    println!(
        "{:<16} {:<8} {:>7} {:>6} {:>6} {:>6} {:>10}",
        "City", "Size", "Offers", "Local", "State", "Intl", "Value"
    );
    println!("{}", "-".repeat(66));
    for report in &snapshot.reports {
        let offers: Vec<&JobOffer> = snapshot.offers_from(&report.city).collect();
        let count = |job_type: JobType| offers.iter().filter(|o| o.job_type == job_type).count();
        let value: u64 = offers.iter().map(|o| o.value).sum();
        println!(
            "{:<16} {:<8} {:>7} {:>6} {:>6} {:>6} {:>10}{}",
            truncate_str(&report.city, 15),
            report.size_class.map(|s| s.label()).unwrap_or("-"),
            offers.len(),
            count(JobType::Local),
            count(JobType::State),
            count(JobType::International),
            value,
            if report.under_target() { "  *" } else { "" }
        );
    }
    println!("{}", "-".repeat(66));
    println!(
        "{:<16} {:<8} {:>7} {:>6} {:>6} {:>6} {:>10}",
        format!("{} cities", summary.cities),
        "",
        summary.offers,
        summary.local,
        summary.state,
        summary.international,
        summary.total_value
    );

    if !summary.under_target.is_empty() {
        println!("\n* Stopped below target: {}", summary.under_target.join(", "));
    }
    println!("\nSeed:            {}", snapshot.seed);
    println!("Generated at:    {}", snapshot.generated_at.format("%Y-%m-%d %H:%M:%S UTC"));

    Ok(())
}

pub fn output_cities(output_format: OutputFormat, catalog: &Catalog) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(catalog.cities())?);
        return Ok(());
    }

    println!("\nCatalog Cities");
    println!("==============");
    println!("{:<20} {:<8} {:<7}", "City", "Size", "Country");
    println!("{}", "-".repeat(37));
    for city in catalog.cities() {
        println!(
            "{:<20} {:<8} {:<7}",
            truncate_str(&city.name, 19),
            city.size_class.label(),
            city.country_code
        );
    }
    println!(
        "\n{} cities, {} cargo categories, {} clients",
        catalog.cities().len(),
        catalog.cargo().len(),
        catalog.clients().len()
    );

    Ok(())
}

fn format_offer_table(offers: &[JobOffer]) -> String {
    let mut table = String::new();
    table.push_str(&format!(
        "{:<7} {:<30} {:<14} {:>7} {:>4} {:>8} {:>5} {:>4} {:<20}\n",
        "ID", "Title", "Type", "km", "t", "Value", "Due", "Exp", "Client"
    ));
    table.push_str("-".repeat(104).as_str());
    table.push('\n');

    for offer in offers {
        table.push_str(&format!(
            "{:<7} {:<30} {:<14} {:>7.0} {:>4} {:>8} {:>5} {:>4} {:<20}\n",
            offer.id,
            truncate_str(&offer.title, 29),
            offer.job_type.label(),
            offer.distance,
            offer.weight,
            offer.value,
            offer.deadline,
            offer.experience,
            truncate_str(&offer.client, 19),
        ));
        if !offer.tags.is_empty() {
            table.push_str(&format!("        [{}]\n", offer.tags.join(", ")));
        }
    }
    table
}

fn format_report(report: &GenerationReport) -> String {
    let mut text = String::new();
    text.push_str(&format!("Initial batch:   {} of {} accepted\n", report.initial_accepted, report.nominal_batch));
    text.push_str(&format!(
        "Backfill:        {} accepted in {} attempts{}\n",
        report.backfill_accepted,
        report.backfill_attempts,
        if report.backfill_exhausted { " (exhausted)" } else { "" }
    ));
    if let Some(boost) = &report.hub_boost {
        text.push_str(&format!(
            "Hub boost:       local {}/{} state {}/{} in {} attempts{}\n",
            boost.final_local,
            boost.target_local,
            boost.final_state,
            boost.target_state,
            boost.attempts,
            if boost.exhausted { " (exhausted)" } else { "" }
        ));
    }
    text.push_str(&format!("Total offers:    {}\n", report.total_offers));
    text
}

fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let truncated: String = s.chars().take(max_len.saturating_sub(2)).collect();
        format!("{}..", truncated)
    } else {
        s.to_string()
    }
}
