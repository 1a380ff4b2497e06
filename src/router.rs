//! Screen stack
//!
//! A static set of named screens. `navigate` returns to a screen already on
//! the stack instead of pushing it twice; `replace` swaps the top entry.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    Home,
    Login,
    Admin,
    Calendar,
    Dishes,
    ChooseDish,
    Plans,
    NewPlan,
}

impl Screen {
    /// Route name used by `navigate`/`replace`
    pub fn name(&self) -> &'static str {
        match self {
            Screen::Home => "Home",
            Screen::Login => "Login",
            Screen::Admin => "Admin",
            Screen::Calendar => "Kalender",
            Screen::Dishes => "Gerichte",
            Screen::ChooseDish => "Gerichtauswahl",
            Screen::Plans => "Essenspläne",
            Screen::NewPlan => "Neuer Plan",
        }
    }

    /// Header title
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Home | Screen::Admin => "MensaApp",
            Screen::Calendar => "Kalenderwoche",
            other => other.name(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavStack {
    entries: Vec<Screen>,
}

impl Default for NavStack {
    fn default() -> Self {
        Self::new(Screen::Home)
    }
}

impl NavStack {
    pub fn new(initial: Screen) -> Self {
        Self { entries: vec![initial] }
    }

    pub fn current(&self) -> Screen {
        self.entries.last().copied().unwrap_or(Screen::Home)
    }

    pub fn can_go_back(&self) -> bool {
        self.entries.len() > 1
    }

    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    pub fn navigate(&mut self, screen: Screen) {
        match self.entries.iter().position(|s| *s == screen) {
            Some(pos) => self.entries.truncate(pos + 1),
            None => self.entries.push(screen),
        }
    }

    pub fn replace(&mut self, screen: Screen) {
        self.entries.pop();
        self.entries.push(screen);
    }

    pub fn back(&mut self) -> bool {
        if self.can_go_back() {
            self.entries.pop();
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_home() {
        let nav = NavStack::default();
        assert_eq!(nav.current(), Screen::Home);
        assert!(!nav.can_go_back());
    }

    #[test]
    fn navigate_pushes_or_returns() {
        let mut nav = NavStack::default();
        nav.navigate(Screen::Login);
        nav.navigate(Screen::Admin);
        nav.navigate(Screen::Plans);
        nav.navigate(Screen::NewPlan);
        nav.navigate(Screen::ChooseDish);
        assert_eq!(nav.depth(), 6);

        // "Hinzufügen" on the new plan screen goes back to the existing list
        nav.navigate(Screen::Plans);
        assert_eq!(nav.current(), Screen::Plans);
        assert_eq!(nav.depth(), 4);
    }

    #[test]
    fn replace_swaps_top_and_back_stops_at_root() {
        let mut nav = NavStack::default();
        nav.navigate(Screen::Admin);
        nav.replace(Screen::Login);
        assert_eq!(nav.current(), Screen::Login);
        assert_eq!(nav.depth(), 2);

        assert!(nav.back());
        assert!(!nav.back());
        assert_eq!(nav.current(), Screen::Home);
    }

    #[test]
    fn titles() {
        assert_eq!(Screen::Plans.name(), "Essenspläne");
        assert_eq!(Screen::Calendar.title(), "Kalenderwoche");
        assert_eq!(Screen::Dishes.title(), "Gerichte");
    }
}
