use dialoguer::{theme::ColorfulTheme, Select};

use crate::card::LinkSet;

/// closed set of menu identifiers, `Quit` is the reserved terminal value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuAction {
    Email,
    Resume,
    Portfolio,
    Github,
    Linkedin,
    Twitter,
    Quit,
}

impl MenuAction {
    pub fn id(&self) -> &'static str {
        match self {
            MenuAction::Email => "email",
            MenuAction::Resume => "view_resume",
            MenuAction::Portfolio => "view_portfolio",
            MenuAction::Github => "view_github",
            MenuAction::Linkedin => "view_linkedin",
            MenuAction::Twitter => "view_twitter",
            MenuAction::Quit => "quit",
        }
    }

    /// display label, decorative only
    pub fn label(&self) -> &'static str {
        match self {
            MenuAction::Email => "✉  Send me an email",
            MenuAction::Resume => "📄  View my resume",
            MenuAction::Portfolio => "🌐  Visit my portfolio",
            MenuAction::Github => "🐙  Browse my GitHub",
            MenuAction::Linkedin => "💼  Find me on LinkedIn",
            MenuAction::Twitter => "🐦  Follow me on Twitter",
            MenuAction::Quit => "👋  Quit",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct MenuChoice {
    pub label: &'static str,
    pub action: MenuAction,
}

/// ordered menu for a link set; entries without a configured link are
/// omitted, quit is always last
pub fn choices(links: &LinkSet) -> Vec<MenuChoice> {
    let mut choices: Vec<MenuChoice> = [
        MenuAction::Email,
        MenuAction::Resume,
        MenuAction::Portfolio,
        MenuAction::Github,
        MenuAction::Linkedin,
        MenuAction::Twitter,
    ]
    .into_iter()
    .filter(|action| links.url_for(*action).is_some())
    .map(|action| MenuChoice {
        label: action.label(),
        action,
    })
    .collect();

    choices.push(MenuChoice {
        label: MenuAction::Quit.label(),
        action: MenuAction::Quit,
    });

    choices
}

pub trait Prompter {
    /// present the choices and block for a selection; cancellation (Esc,
    /// Ctrl-C, closed input) is absorbed into `MenuAction::Quit`
    fn prompt(&mut self, choices: &[MenuChoice]) -> MenuAction;
}

/// interactive prompter on dialoguer's select widget
pub struct TermPrompter;

impl Prompter for TermPrompter {
    fn prompt(&mut self, choices: &[MenuChoice]) -> MenuAction {
        let labels: Vec<&str> = choices.iter().map(|c| c.label).collect();

        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("What would you like to do?")
            .items(&labels)
            .default(0)
            .interact_opt();

        match selection {
            Ok(Some(index)) => choices[index].action,
            // Esc, Ctrl-C, or a closed input stream: treat as a normal quit
            Ok(None) | Err(_) => MenuAction::Quit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Card;

    #[test]
    fn identifiers_are_unique() {
        let card = Card::default();
        let choices = choices(&card.links);

        for (i, a) in choices.iter().enumerate() {
            for b in choices.iter().skip(i + 1) {
                assert_ne!(a.action.id(), b.action.id());
            }
        }
    }

    #[test]
    fn quit_is_always_last() {
        let mut card = Card::default();
        card.links.twitter = None;

        let choices = choices(&card.links);
        assert_eq!(choices.last().unwrap().action, MenuAction::Quit);
        assert!(!choices.iter().any(|c| c.action == MenuAction::Twitter));
    }

    #[test]
    fn every_choice_except_quit_resolves() {
        let card = Card::default();
        for choice in choices(&card.links) {
            if choice.action != MenuAction::Quit {
                assert!(
                    card.links.url_for(choice.action).is_some(),
                    "'{}' has no link",
                    choice.action.id()
                );
            }
        }
    }
}
