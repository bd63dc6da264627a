//! Plain-text chat transcripts.

use chrono::{DateTime, Utc};

/// One message of a transcript.
#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptLine {
    pub created_at: DateTime<Utc>,
    pub author_name: String,
    pub author_id: u64,
    pub content: String,
    pub attachment_urls: Vec<String>,
    pub embed_titles: Vec<String>,
}

/// Keeps the newest `max` of `newest_first` and puts them in chronological order.
///
/// # Returns
/// - `(lines, truncated)` - `truncated` is true when older messages were dropped
pub fn keep_newest(mut newest_first: Vec<TranscriptLine>, max: usize) -> (Vec<TranscriptLine>, bool) {
    let truncated = newest_first.len() > max;
    newest_first.truncate(max);
    newest_first.reverse();
    (newest_first, truncated)
}

/// Renders `lines` oldest first, one message per line plus indented attachments and embeds.
///
/// Lines must already be in chronological order. A truncated transcript says so in its header.
pub fn render(channel_name: &str, lines: &[TranscriptLine], truncated: bool) -> String {
    let mut out = format!(
        "Transcript of #{} ({} messages{})\n\n",
        channel_name,
        lines.len(),
        if truncated { ", older messages omitted" } else { "" }
    );

    for line in lines {
        out.push_str(&format!(
            "[{}] {} ({}): {}\n",
            line.created_at.format("%Y-%m-%d %H:%M:%S UTC"),
            line.author_name,
            line.author_id,
            line.content
        ));
        for url in &line.attachment_urls {
            out.push_str(&format!("    attachment: {}\n", url));
        }
        for title in &line.embed_titles {
            out.push_str(&format!("    embed: {}\n", title));
        }
    }

    out
}

/// File name of the transcript attachment for `channel_id`.
pub fn file_name(channel_id: u64) -> String {
    format!("transcript-{}.txt", channel_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn renders_messages_with_attachments_and_embeds() {
        let lines = vec![
            TranscriptLine {
                created_at: Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap(),
                author_name: "alice".to_string(),
                author_id: 1,
                content: "hello".to_string(),
                attachment_urls: vec!["https://cdn.example/a.png".to_string()],
                embed_titles: vec![],
            },
            TranscriptLine {
                created_at: Utc.with_ymd_and_hms(2024, 1, 2, 3, 5, 0).unwrap(),
                author_name: "bot".to_string(),
                author_id: 2,
                content: String::new(),
                attachment_urls: vec![],
                embed_titles: vec!["Ticket closed".to_string()],
            },
        ];

        let text = render("ticket-0001", &lines, false);

        assert_eq!(
            text,
            "Transcript of #ticket-0001 (2 messages)\n\n\
             [2024-01-02 03:04:05 UTC] alice (1): hello\n\
             \x20   attachment: https://cdn.example/a.png\n\
             [2024-01-02 03:05:00 UTC] bot (2): \n\
             \x20   embed: Ticket closed\n"
        );
    }

    fn line(author_id: u64) -> TranscriptLine {
        TranscriptLine {
            created_at: Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap(),
            author_name: "alice".to_string(),
            author_id,
            content: "hi".to_string(),
            attachment_urls: vec![],
            embed_titles: vec![],
        }
    }

    #[test]
    fn keeps_newest_messages_up_to_cap() {
        let newest_first = vec![line(5), line(4), line(3), line(2), line(1)];

        let (lines, truncated) = keep_newest(newest_first, 3);

        assert!(truncated);
        assert_eq!(
            lines.iter().map(|l| l.author_id).collect::<Vec<_>>(),
            vec![3, 4, 5]
        );
        assert!(render("general", &lines, truncated)
            .starts_with("Transcript of #general (3 messages, older messages omitted)\n"));
    }

    #[test]
    fn short_history_is_not_truncated() {
        let (lines, truncated) = keep_newest(vec![line(2), line(1)], 3);

        assert!(!truncated);
        assert_eq!(lines.len(), 2);
        assert!(render("general", &lines, truncated).starts_with("Transcript of #general (2 messages)\n"));
    }

    #[test]
    fn file_name_contains_channel() {
        assert_eq!(file_name(42), "transcript-42.txt");
    }
}
