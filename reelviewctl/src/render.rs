//! Plain-text rendering of a page snapshot.

use std::fmt::Write;

use reelview_core::page::PageSnapshot;

pub fn render(snapshot: &PageSnapshot) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_page(&mut out, snapshot);
    out
}

fn write_page(out: &mut String, page: &PageSnapshot) -> std::fmt::Result {
    writeln!(out, "{} ({:?})", page.path, page.page)?;

    if page.loading {
        writeln!(out, "Loading...")?;
    } else if let Some(banner) = &page.banner {
        writeln!(out)?;
        writeln!(out, "== {} ==", banner.title)?;
        if !banner.overview.is_empty() {
            writeln!(out, "{}", banner.overview)?;
        }
        writeln!(out, "{}", banner.image_url)?;
    }

    for (index, slider) in page.sliders.iter().enumerate() {
        writeln!(out)?;
        write!(out, "[{index}] {}", slider.title)?;
        if slider.loading {
            writeln!(out, "  (loading)")?;
            continue;
        }
        writeln!(
            out,
            "  page {}/{}",
            slider.page_index + 1,
            slider.page_count.max(1)
        )?;
        for card in &slider.cards {
            writeln!(out, "  {:>8}  {}", card.id.get(), card.title)?;
        }
    }

    if let Some(overlay) = &page.overlay {
        writeln!(out)?;
        match &overlay.item {
            Some(item) => {
                writeln!(out, "-- {} --", item.title)?;
                writeln!(out, "{}", item.image_url)?;
                let facts: Vec<&str> =
                    [item.release_date.as_deref(), item.rating.as_deref()]
                        .into_iter()
                        .flatten()
                        .collect();
                if !facts.is_empty() {
                    writeln!(out, "{}", facts.join("  "))?;
                }
            }
            None => writeln!(out, "-- item {} --", overlay.item_id)?,
        }
        if let Some(detail) = &overlay.detail {
            if let Some(tagline) = &detail.tagline {
                writeln!(out, "\"{tagline}\"")?;
            }
            let facts: Vec<&str> = [
                detail.release_year.as_deref(),
                detail.runtime.as_deref(),
                detail.rating.as_deref(),
            ]
            .into_iter()
            .flatten()
            .collect();
            if !facts.is_empty() {
                writeln!(out, "{}", facts.join("  "))?;
            }
            if !detail.genres.is_empty() {
                writeln!(out, "{}", detail.genres.join(", "))?;
            }
        }
        if let Some(item) = &overlay.item
            && !item.overview.is_empty()
        {
            writeln!(out, "{}", item.overview)?;
        }
    }

    Ok(())
}
