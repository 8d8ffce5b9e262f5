use crate::app::App;
use crate::commands::{Category, Command, CommandRegistry, MenuEntry};
use ratatui::{
    layout::{Constraint, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Min(3),
        Constraint::Length(3),
    ])
    .split(frame.area());

    // Text area
    if let Some(editor) = app.focused() {
        frame.render_widget(editor.textarea(), chunks[0]);
    }

    // Status bar
    frame.render_widget(create_status_bar(app), chunks[1]);
}

fn create_status_bar(app: &App) -> Paragraph<'static> {
    let (title, modified) = match app.focused() {
        Some(editor) => (editor.title(), editor.is_modified()),
        None => (String::new(), false),
    };

    let modified_indicator = if modified {
        Span::styled(
            "** ",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::raw("-- ")
    };

    let ring_indicator = match app.ring_summary() {
        Some((len, Some(cursor))) => format!(
            "  ring {}/{} @{}",
            len,
            app.settings.kill_ring_capacity,
            cursor + 1
        ),
        _ => "  ring empty".to_string(),
    };

    let editors_indicator = match (app.workspace.focused_index(), app.workspace.len()) {
        (Some(i), n) if n > 1 => format!("  [{}/{}]", i + 1, n),
        _ => String::new(),
    };

    let mut info_line = vec![
        modified_indicator,
        Span::styled(title, Style::default().add_modifier(Modifier::BOLD)),
        Span::styled(ring_indicator, Style::default().fg(Color::Cyan)),
        Span::raw(editors_indicator),
    ];
    if let Some(status) = &app.status {
        info_line.push(Span::styled(
            format!("  {}", status),
            Style::default().fg(Color::Yellow),
        ));
    }

    let mut help_spans = Vec::new();
    for (i, (category, items)) in help_groups(&app.commands).into_iter().enumerate() {
        if i > 0 {
            help_spans.push(Span::styled(" | ", Style::default().fg(Color::DarkGray)));
        }
        help_spans.push(Span::styled(
            format!("{} ", category.display_name()),
            Style::default().add_modifier(Modifier::BOLD),
        ));
        for (j, (key, label)) in items.into_iter().enumerate() {
            if j > 0 {
                help_spans.push(Span::raw(" "));
            }
            help_spans.push(Span::styled(
                key,
                Style::default().fg(Color::Cyan),
            ));
            help_spans.push(Span::raw(":"));
            help_spans.push(Span::styled(
                label,
                Style::default().fg(Color::DarkGray),
            ));
        }
    }

    Paragraph::new(vec![Line::from(info_line), Line::from(help_spans)])
        .block(Block::default().borders(Borders::TOP))
}

/// Key help grouped by category: the Edit menu entries first, in menu order,
/// then the Buffer and System commands.
pub fn help_groups(registry: &CommandRegistry) -> Vec<(Category, Vec<(String, &'static str)>)> {
    let edit = registry
        .edit_menu()
        .iter()
        .filter_map(|entry| match entry {
            MenuEntry::Item(id) => registry.get(id),
            MenuEntry::Divider => None,
        })
        .filter_map(help_item)
        .collect();

    let mut groups = vec![(Category::Edit, edit)];
    for category in [Category::Buffer, Category::System] {
        let items = registry
            .by_category(category)
            .into_iter()
            .filter_map(help_item)
            .collect();
        groups.push((category, items));
    }
    groups
}

fn help_item(command: &Command) -> Option<(String, &'static str)> {
    let binding = command.keybinding.as_ref()?;
    Some((binding.display(), command.label))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_follows_registry() {
        let registry = CommandRegistry::new();
        let groups = help_groups(&registry);

        let categories: Vec<Category> = groups.iter().map(|(c, _)| *c).collect();
        assert_eq!(categories, vec![Category::Edit, Category::Buffer, Category::System]);

        assert_eq!(
            groups[0].1,
            vec![
                ("C-k".to_string(), "Kill"),
                ("C-y".to_string(), "Yank"),
                ("M-y/s-y".to_string(), "Yank Again"),
            ]
        );
        assert_eq!(groups[1].1.len(), 3);
        assert_eq!(groups[2].1, vec![("C-q".to_string(), "Quit")]);
    }
}
