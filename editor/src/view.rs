//! Plain-text rendering of the editor state.

use std::fmt::Write;

use post_core::EditorState;

/// Render the editor the way the terminal front-end shows it: the edit form,
/// a cancel button while loading, the post list when it has entries and the
/// error line when an error is set.
pub fn render(state: &EditorState) -> String {
    let mut out = String::new();
    let edit = state.edit();

    let target = match edit.id {
        Some(id) => format!("editing #{id}"),
        None => "new post".to_string(),
    };
    let _ = writeln!(out, "== {target} ==");
    let _ = writeln!(out, "title: {}", placeholder(&edit.title, "Enter title"));
    let _ = writeln!(out, "body:  {}", placeholder(&edit.body, "Enter body"));
    out.push_str("[Save]\n");

    if state.is_loading() {
        out.push_str("[Cancel]\n");
    }

    if !state.posts().is_empty() {
        out.push('\n');
        for post in state.posts() {
            let id = post.id.map_or_else(|| "-".to_string(), |id| id.to_string());
            let _ = writeln!(out, "#{id} {}", post.title);
            if !post.body.is_empty() {
                for line in post.body.lines() {
                    let _ = writeln!(out, "    {line}");
                }
            }
            out.push_str("    [Update] [Delete]\n");
        }
    }

    if let Some(failure) = state.error() {
        let _ = writeln!(out, "\nerror: {failure}");
    }

    out
}

fn placeholder<'a>(value: &'a str, hint: &'a str) -> &'a str {
    if value.is_empty() {
        hint
    } else {
        value
    }
}
