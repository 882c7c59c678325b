// SPDX-License-Identifier: MPL-2.0
//! Rendering of the general settings panel.

use super::{Message, State};
use crate::app::platform::display_path;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, checkbox, container, pick_list, text, text_input, Column, Row};
use iced::{Alignment, Element, Length};

/// Contextual data needed to render the settings panel.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

impl State {
    /// Render the settings panel.
    #[must_use]
    #[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let title = text(ctx.i18n.tr("settings-title")).size(typography::TITLE_LG);

        let content = Column::new()
            .spacing(spacing::LG)
            .width(Length::Fill)
            .push(title)
            .push(self.downloads_path_section(&ctx))
            .push(self.language_section(&ctx))
            .push(self.notifications_section(&ctx));

        container(content)
            .padding(spacing::LG)
            .width(Length::Fill)
            .style(styles::container::panel)
            .into()
    }

    fn downloads_path_section<'a>(&'a self, ctx: &ViewContext<'a>) -> Element<'a, Message> {
        let label = text(ctx.i18n.tr("settings-downloads-path")).size(typography::BODY);

        // No `on_input`: the field is read-only and only the picker changes it.
        let path = text_input("", &display_path(&self.form().downloads_path))
            .size(typography::BODY_LG)
            .padding(spacing::XS)
            .width(Length::Fill);

        let change = button(text(ctx.i18n.tr("settings-change")).size(typography::BODY))
            .height(sizing::BUTTON_HEIGHT)
            .style(button::secondary)
            .on_press(Message::ChooseDownloadsPath);

        Column::new()
            .spacing(spacing::XXS)
            .push(label)
            .push(
                Row::new()
                    .spacing(spacing::XS)
                    .align_y(Alignment::Center)
                    .push(path)
                    .push(change),
            )
            .into()
    }

    fn language_section<'a>(&'a self, ctx: &ViewContext<'a>) -> Element<'a, Message> {
        let heading = text(ctx.i18n.tr("settings-language")).size(typography::TITLE_SM);

        let picker = pick_list(
            self.language_options(),
            self.selected_language(),
            Message::LanguageSelected,
        )
        .placeholder(ctx.i18n.tr("settings-language-placeholder"))
        .padding(spacing::XS)
        .width(Length::Fill);

        Column::new()
            .spacing(spacing::XS)
            .push(heading)
            .push(picker)
            .into()
    }

    fn notifications_section<'a>(&'a self, ctx: &ViewContext<'a>) -> Element<'a, Message> {
        let heading = text(ctx.i18n.tr("settings-notifications")).size(typography::TITLE_SM);
        let form = self.form();

        let downloads = checkbox(form.download_notifications_enabled)
            .label(ctx.i18n.tr("settings-enable-download-notifications"))
            .on_toggle(|_| Message::ToggleDownloadNotifications)
            .text_size(typography::BODY);

        let repacks = checkbox(form.repack_updates_notifications_enabled)
            .label(ctx.i18n.tr("settings-enable-repack-list-notifications"))
            .on_toggle(|_| Message::ToggleRepackUpdatesNotifications)
            .text_size(typography::BODY);

        Column::new()
            .spacing(spacing::XS)
            .push(heading)
            .push(downloads)
            .push(repacks)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UserPreferences;

    #[test]
    fn view_renders_before_preferences_load() {
        let i18n = I18n::default();
        let state = State::new(i18n.available_locales());
        let _element = state.view(ViewContext { i18n: &i18n });
    }

    #[test]
    fn view_renders_with_preferences() {
        let i18n = I18n::default();
        let mut state = State::new(i18n.available_locales());
        state.sync(Some(&UserPreferences::default()));
        let _element = state.view(ViewContext { i18n: &i18n });
    }
}
