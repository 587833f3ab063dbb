// SPDX-License-Identifier: MPL-2.0
//! View rendering for the demo application.

use super::Message;
use crate::compare::{self, ViewContext as CompareViewContext};
use crate::i18n::I18n;
use crate::ui::design_tokens::{spacing, typography};
use iced::widget::{column, container, text};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub comparison: &'a compare::State,
    pub status: Option<&'a str>,
}

/// Renders the comparison centered in the window, with an optional status line.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let comparison = ctx
        .comparison
        .view(CompareViewContext { i18n: ctx.i18n })
        .map(Message::Compare);

    let mut content = column![container(comparison).center(Length::Fill)].spacing(spacing::XS);

    if let Some(status) = ctx.status {
        content = content.push(text(status).size(typography::FOOTNOTE));
    } else if ctx.comparison.is_loading() {
        content = content.push(text(ctx.i18n.tr("loading")).size(typography::FOOTNOTE));
    }

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::MD)
        .into()
}
