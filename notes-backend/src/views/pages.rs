//! Full-page renders for the list and edit views.

use super::html::Html;
use crate::notes::Note;

const BASE_STYLE: &str = "
    body { font-family: Arial, sans-serif; max-width: 600px; margin: 20px auto; padding: 0 20px; }
    input, textarea { width: 100%; padding: 8px; margin: 5px 0; box-sizing: border-box; font-family: Arial; }
    button { padding: 8px 16px; background: #007bff; color: white; border: none; cursor: pointer; }
    button:hover { background: #0056b3; }";

const LIST_STYLE: &str = "
    .note { border: 1px solid #ddd; padding: 10px; margin: 10px 0; }
    .note-title { font-weight: bold; }
    .note-content { margin: 5px 0; white-space: pre-wrap; word-break: break-word; }
    .note-actions { margin-top: 8px; }
    .note-actions a { margin-right: 10px; color: #007bff; text-decoration: none; font-size: 14px; }
    .note-actions a:hover { text-decoration: underline; }";

const EDIT_STYLE: &str = "
    .button-group { margin-top: 10px; }
    .button-group a { margin-left: 10px; color: #007bff; text-decoration: none; }
    .button-group a:hover { text-decoration: underline; }";

fn head(html: &mut Html, title: &'static str, style: &'static str) {
    html.raw("<!DOCTYPE html>\n<html>\n<head>\n  <title>")
        .raw(title)
        .raw("</title>\n  <style>")
        .raw(BASE_STYLE)
        .raw(style)
        .raw("\n  </style>\n</head>\n<body>\n");
}

/// Home page: add form plus one card per note
pub fn list_page(notes: &[Note]) -> String {
    let mut html = Html::new();
    head(&mut html, "My Notes", LIST_STYLE);

    html.raw(
        r#"  <h1>My Notes</h1>

  <form method="POST" action="/add-note">
    <input type="text" name="title" placeholder="Note title" required>
    <textarea name="content" placeholder="Note content" required></textarea>
    <button type="submit">Add Note</button>
  </form>

  <h2>Notes ("#,
    )
    .text(notes.len())
    .raw(")</h2>\n");

    if notes.is_empty() {
        html.raw("  <p>No notes yet.</p>\n");
    }

    for (index, note) in notes.iter().enumerate() {
        html.raw("  <div class=\"note\">\n    <div class=\"note-title\">")
            .text(&note.title)
            .raw("</div>\n    <div class=\"note-content\">")
            .text(&note.content)
            .raw("</div>\n    <div class=\"note-actions\">\n      <a href=\"/edit/")
            .text(index)
            .raw("\">Edit</a>\n      <a href=\"/delete/")
            .text(index)
            .raw("\" onclick=\"return confirm('Delete this note?')\">Delete</a>\n    </div>\n  </div>\n");
    }

    html.raw("</body>\n</html>\n");
    html.into_string()
}

/// Edit form pre-filled with the note at `index`
pub fn edit_page(index: usize, note: &Note) -> String {
    let mut html = Html::new();
    head(&mut html, "Edit Note", EDIT_STYLE);

    html.raw("  <h1>Edit Note</h1>\n\n  <form method=\"POST\" action=\"/update/")
        .text(index)
        .raw("\">\n    <input type=\"text\" name=\"title\" value=\"")
        .text(&note.title)
        .raw("\" required>\n    <textarea name=\"content\" required>")
        .text(&note.content)
        .raw(
            r#"</textarea>
    <div class="button-group">
      <button type="submit">Save</button>
      <a href="/">Cancel</a>
    </div>
  </form>
</body>
</html>
"#,
        );
    html.into_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notes::model::now;

    #[test]
    fn test_list_page_empty_placeholder() {
        let page = list_page(&[]);
        assert!(page.contains("<p>No notes yet.</p>"));
        assert!(page.contains("Notes (0)"));
        assert!(page.contains("action=\"/add-note\""));
    }

    #[test]
    fn test_list_page_cards_keyed_by_index() {
        let notes = vec![Note::new("First", "one", now()), Note::new("Second", "two", now())];
        let page = list_page(&notes);

        assert!(!page.contains("No notes yet."));
        assert!(page.contains("Notes (2)"));
        assert!(page.contains("<div class=\"note-title\">First</div>"));
        assert!(page.contains("<div class=\"note-content\">two</div>"));
        assert!(page.contains("href=\"/edit/0\""));
        assert!(page.contains("href=\"/edit/1\""));
        assert!(page.contains("href=\"/delete/1\""));
        assert!(!page.contains("href=\"/edit/2\""));
    }

    #[test]
    fn test_list_page_escapes_user_text() {
        let notes = vec![Note::new("<script>alert('x')</script>", "a & b \"quoted\"", now())];
        let page = list_page(&notes);

        assert!(!page.contains("<script>"));
        assert!(page.contains("&lt;script&gt;alert(&#039;x&#039;)&lt;/script&gt;"));
        assert!(page.contains("a &amp; b &quot;quoted&quot;"));
    }

    #[test]
    fn test_edit_page_prefilled() {
        let note = Note::new("Title \"q\"", "<b>body</b>", now());
        let page = edit_page(3, &note);

        assert!(page.contains("action=\"/update/3\""));
        assert!(page.contains("value=\"Title &quot;q&quot;\""));
        assert!(page.contains("required>&lt;b&gt;body&lt;/b&gt;</textarea>"));
        assert!(page.contains("<a href=\"/\">Cancel</a>"));
    }
}
