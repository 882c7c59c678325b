// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::Message;
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::settings::{State as SettingsState, ViewContext as SettingsViewContext};
use crate::ui::styles;
use iced::{
    widget::{container, scrollable, text, Column, Container},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub settings: &'a SettingsState,
    pub config_warning: Option<&'a str>,
    pub save_error: Option<&'a Error>,
}

/// Renders the settings screen with any load/save banners above it.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut column = Column::new()
        .spacing(spacing::MD)
        .max_width(sizing::SETTINGS_MAX_WIDTH)
        .width(Length::Fill);

    if let Some(key) = ctx.config_warning {
        column = column.push(banner(ctx.i18n.tr(key), styles::container::warning_banner));
    }
    if let Some(error) = ctx.save_error {
        let message = format!(
            "{} {}",
            ctx.i18n.tr("settings-save-error"),
            ctx.i18n.tr(error.i18n_key())
        );
        column = column.push(banner(message, styles::container::error_banner));
    }

    column = column.push(
        ctx.settings
            .view(SettingsViewContext { i18n: ctx.i18n })
            .map(Message::Settings),
    );

    Container::new(scrollable(column))
        .padding(spacing::LG)
        .center_x(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn banner<'a>(
    message: String,
    style: fn(&iced::Theme) -> container::Style,
) -> Element<'a, Message> {
    container(text(message).size(typography::BODY))
        .padding(spacing::SM)
        .width(Length::Fill)
        .style(style)
        .into()
}
