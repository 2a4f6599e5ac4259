//! Status and pagination strip rendering.

use super::style::DIVIDER;
use super::Model;

impl<R> Model<R> {
    /// Plain status text, e.g. `"Showing 21-25 of 25"`, or the empty-state
    /// message when nothing matches.
    pub fn status_text(&self) -> String {
        let vm = self.view_model();
        if vm.is_empty() {
            return self.empty_message.clone();
        }
        format!(
            "Showing {}-{} of {}",
            vm.first_shown(),
            vm.last_shown(),
            vm.total_count()
        )
    }

    /// Renders the strip shown under the table: counts, the committed search
    /// term if any, and the pagination control.
    pub fn view(&self) -> String {
        if self.filtered.is_empty() {
            return self.styles.status_empty.clone().render(&self.empty_message);
        }

        let mut status = self.styles.status_bar.clone().render(&self.status_text());
        if !self.search_term.trim().is_empty() {
            status.push(' ');
            status.push_str(
                &self
                    .styles
                    .active_search
                    .clone()
                    .render(&format!("for \"{}\"", self.search_term.trim())),
            );
        }

        format!(
            "{}{}{}",
            status,
            self.styles.divider.clone().render(DIVIDER),
            self.styles.pagination.clone().render(&self.paginator.view())
        )
    }
}
