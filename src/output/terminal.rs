// Colored terminal output for moderation verdicts and stored comments.
//
// All terminal-specific formatting lives here. The main.rs command arms
// delegate to these functions.

use colored::Colorize;

use crate::db::models::Comment;
use crate::moderation::ModerationOutcome;
use crate::pipeline::sweep::SweepSummary;

/// Display which checks fired for a message and what it became.
pub fn display_check(original: &str, outcome: &ModerationOutcome) {
    println!("\n{}", "=== Moderation Check ===".bold());
    println!("  Input:     {}", original.dimmed());
    println!("  Shouting:  {}", verdict(outcome.shouting));
    println!("  Profanity: {}", verdict(outcome.profanity));

    if outcome.text == original {
        println!("  Result:    {}", "unchanged".green());
    } else {
        println!("  Result:    {}", outcome.text.bold());
    }
}

/// Display a list of stored comments, newest first.
pub fn display_comments(comments: &[Comment]) {
    if comments.is_empty() {
        println!("No comments stored yet. Run `comment-moderator post` to add one.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Comments ({}) ===", comments.len()).bold()
    );
    println!();

    println!(
        "  {:<20} {:<10} {:<19}  {}",
        "Id".dimmed(),
        "State".dimmed(),
        "Updated".dimmed(),
        "Content".dimmed(),
    );
    println!("  {}", "-".repeat(78).dimmed());

    for comment in comments {
        let state = if comment.moderated {
            "moderated".yellow()
        } else {
            "clean".green()
        };
        let content = match comment.comment_content.as_deref() {
            Some(text) if !text.is_empty() => super::truncate_chars(text, 60).normal(),
            _ => "(no content)".dimmed(),
        };
        println!(
            "  {:<20} {:<10} {:<19}  {}",
            super::truncate_chars(&comment.id, 17),
            state,
            comment.updated_at,
            content,
        );
    }
    println!();
}

/// Display a stored comment after a write.
pub fn display_comment_detail(comment: &Comment) {
    println!("\n{}", format!("=== Comment {} ===", comment.id).bold());
    match comment.comment_content.as_deref() {
        Some(text) if !text.is_empty() => println!("  Content: {text}"),
        _ => println!("  Content: {}", "(none, moderation skipped)".dimmed()),
    }
    if comment.moderated {
        println!("  {} rewritten by moderation", "!".yellow());
    }
}

/// Display the result of a sweep.
pub fn display_sweep_summary(summary: &SweepSummary) {
    println!("\n{}", "Sweep complete.".bold());
    println!("  Comments scanned:   {}", summary.scanned);
    println!("  Comments moderated: {}", summary.moderated);
    println!("  Without content:    {}", summary.skipped);
    if summary.superseded > 0 {
        println!("  Edited mid-sweep:   {} (newer text kept)", summary.superseded);
    }
    if summary.failed > 0 {
        println!("  {} {} failed", "Warning:".yellow(), summary.failed);
    }
}

fn verdict(fired: bool) -> colored::ColoredString {
    if fired {
        "yes".red().bold()
    } else {
        "no".green()
    }
}
