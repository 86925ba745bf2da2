//! Cardview Demo - Main Entry Point
//!
//! Walks a data view over sample card stock through search, sort and
//! paging, printing each visible slice as plain text.

use anyhow::Result;
use chrono::Utc;

use cardview::domain::{CardStatus, TestCard, ViewConfig};
use cardview::utils::format::fit;
use cardview::view::{CellValue, Column, DataView, JsonRow, Record};

fn sample_cards() -> Vec<TestCard> {
    let networks = ["Visa", "Mastercard", "Amex"];
    let holders = ["Ann Tester", "Bob Probe", "Cara Check", "Dan Verify"];
    (1..=23)
        .map(|i| TestCard {
            id: format!("card-{i:03}"),
            pan_masked: format!("4{i:03} **** **** {:04}", 9000 + i),
            network: networks[i % networks.len()].to_string(),
            holder: holders[i % holders.len()].to_string(),
            status: if i % 3 == 0 { CardStatus::Assigned } else { CardStatus::Available },
            assigned_to: (i % 3 == 0).then(|| format!("tester-{}", i % 5)),
            bundle_id: Some(format!("bundle-{}", i % 4)),
            expires: format!("{:02}/27", (i % 12) + 1),
            created_time: Utc::now(),
            updated_time: Utc::now(),
        })
        .collect()
}

fn card_columns() -> Vec<Column<JsonRow>> {
    vec![
        Column::new("pan_masked", "Card").fixed_width(220.0),
        Column::new("holder", "Holder").sortable(),
        Column::new("network", "Network").sortable(),
        Column::new("status", "Status").render_with(|row: &JsonRow| {
            let status = row.field("status").and_then(|v| v.as_str()).unwrap_or("");
            CellValue::Text(status.to_uppercase())
        }),
        Column::new("expires", "Expires").fixed_width(80.0),
    ]
}

fn print_view(title: &str, view: &DataView<JsonRow>) {
    println!("\n== {title} ==");
    let header: Vec<String> = view
        .visible_columns()
        .iter()
        .map(|col| fit(&col.label, 22))
        .collect();
    println!("{}", header.join(" "));

    let rows = view.visible_rows();
    if rows.is_empty() {
        println!("{}", view.empty_text());
    }
    for row in rows {
        let cells: Vec<String> = view
            .cells(row)
            .iter()
            .map(|cell| fit(&cell.display(), 22))
            .collect();
        println!("{}", cells.join(" "));
    }
    println!(
        "page {}/{} ({} cards)",
        view.state().current_page,
        view.total_pages(),
        view.effective_total()
    );
}

fn main() -> Result<()> {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting cardview demo...");

    let config = ViewConfig::load().unwrap_or_default();

    let rows: Vec<JsonRow> = sample_cards()
        .iter()
        .map(TestCard::to_row)
        .collect::<Result<_, _>>()?;

    let mut view = DataView::new(card_columns(), rows)
        .initial_entries_per_page(config.entries_per_page)
        .empty_message("No cards found");

    print_view("card stock", &view);

    view.next_page();
    print_view("next page", &view);

    view.set_search_term("visa");
    print_view("search: visa", &view);

    view.set_search_term("");
    view.toggle_sort("holder");
    print_view("sorted by holder", &view);

    view.toggle_sort("holder");
    print_view("sorted by holder, descending", &view);

    Ok(())
}
