use serde::Serialize;

use crate::app::{AppContext, Result};
use crate::crawler::{Crawl, ListingKind, Termination};
use crate::domain::Film;

/// Fetch a member's feed and print their most recent diary entries.
pub async fn recent(ctx: &AppContext, username: Option<&str>, json: bool) -> Result<()> {
    let username = ctx.resolve_username(username)?;
    let films = fetch_recent(ctx, &username).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&films)?);
        return Ok(());
    }

    if films.is_empty() {
        println!("No recent activity for {}", username);
        return Ok(());
    }

    println!("Recently watched by {}:", username);
    print_films(&films, ctx.config.report.recent_limit);
    Ok(())
}

/// Crawl and print every film the member has logged.
pub async fn films(ctx: &AppContext, username: Option<&str>, json: bool) -> Result<()> {
    listing(ctx, username, ListingKind::Films, json).await
}

/// Crawl and print the member's watchlist.
pub async fn watchlist(ctx: &AppContext, username: Option<&str>, json: bool) -> Result<()> {
    listing(ctx, username, ListingKind::Watchlist, json).await
}

async fn listing(
    ctx: &AppContext,
    username: Option<&str>,
    kind: ListingKind,
    json: bool,
) -> Result<()> {
    let username = ctx.resolve_username(username)?;
    let crawl = ctx.crawler.crawl(&username, kind).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&crawl.films)?);
        return Ok(());
    }

    println!(
        "{}: {} films{}",
        section_title(kind),
        crawl.films.len(),
        truncation_note(&crawl)
    );
    for film in &crawl.films {
        println!("  {}", film.summary_line());
    }
    Ok(())
}

/// Combined report for JSON output.
#[derive(Serialize)]
struct Report<'a> {
    username: &'a str,
    recent: Option<&'a [Film]>,
    films: &'a [Film],
    films_complete: bool,
    watchlist: &'a [Film],
    watchlist_complete: bool,
}

/// Fetch everything for a member and print the combined report.
///
/// A failing feed only loses the recent-activity section; the two
/// listing crawls already degrade to partial results on their own.
pub async fn report(ctx: &AppContext, username: Option<&str>, json: bool) -> Result<()> {
    let username = ctx.resolve_username(username)?;

    let recent = match fetch_recent(ctx, &username).await {
        Ok(films) => Some(films),
        Err(e) => {
            eprintln!("Could not fetch recent activity: {}", e);
            None
        }
    };
    let films = ctx.crawler.crawl(&username, ListingKind::Films).await;
    let watchlist = ctx.crawler.crawl(&username, ListingKind::Watchlist).await;

    if json {
        let report = Report {
            username: &username,
            recent: recent.as_deref(),
            films: &films.films,
            films_complete: films.is_complete(),
            watchlist: &watchlist.films,
            watchlist_complete: watchlist.is_complete(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    match &recent {
        Some(entries) if entries.is_empty() => {
            println!("Recently watched by {}: nothing logged", username)
        }
        Some(entries) => {
            println!("Recently watched by {}:", username);
            print_films(entries, ctx.config.report.recent_limit);
        }
        None => println!("Recently watched by {}: unavailable", username),
    }

    println!();
    println!(
        "All films: {}{}",
        films.films.len(),
        truncation_note(&films)
    );
    print_films(&films.films, ctx.config.report.preview_limit);

    println!();
    println!(
        "Watchlist: {}{}",
        watchlist.films.len(),
        truncation_note(&watchlist)
    );
    print_films(&watchlist.films, ctx.config.report.preview_limit);

    Ok(())
}

async fn fetch_recent(ctx: &AppContext, username: &str) -> Result<Vec<Film>> {
    let url = ctx.config.site.feed_url(username);
    let body = ctx.fetcher.fetch(&url).await?;
    ctx.normalizer.normalize(&body)
}

fn print_films(films: &[Film], limit: usize) {
    for film in films.iter().take(limit) {
        println!("  {}", film.summary_line());
    }
    if films.len() > limit {
        println!("  ... and {} more", films.len() - limit);
    }
}

fn section_title(kind: ListingKind) -> &'static str {
    match kind {
        ListingKind::Films => "All films",
        ListingKind::Watchlist => "Watchlist",
    }
}

fn truncation_note(crawl: &Crawl) -> &'static str {
    match crawl.termination {
        Termination::EndOfListing => "",
        Termination::FetchFailed => " (partial, a page request failed)",
        Termination::PageCeiling => " (partial, page ceiling reached)",
    }
}
