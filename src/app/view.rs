use super::messages::Message;
use super::state::{
    App, FONT_WEIGHT_STEP, FontChip, GOOGLE_FONT_INPUT_ID, MAX_FONT_WEIGHT, MIN_FONT_WEIGHT,
    PREVIEW_CHARACTER_TEXT, PREVIEW_USER_TEXT, display_font, empty_chips_hint, font_chips,
    font_family_input_id,
};
use crate::settings::{FontKind, Scope};
use crate::style::build_preview;
use iced::alignment::Vertical;
use iced::widget::{
    Column, Row, button, checkbox, column, container, horizontal_space, row, scrollable, slider,
    text, text_input, tooltip,
};
use iced::{Color, Element, Font, Length, Theme};

type ButtonStyle = fn(&Theme, button::Status) -> button::Style;

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        if let Some(notice) = &self.panel.notice {
            return self.notice(notice);
        }

        let header = row![
            text("TypefaceR").size(22.0),
            horizontal_space(),
            checkbox("Enable custom fonts", self.settings.enabled)
                .on_toggle(Message::EnabledToggled),
        ]
        .spacing(10)
        .align_y(Vertical::Center);

        let tabs = Scope::ALL.iter().fold(Row::new().spacing(6), |tabs, scope| {
            let style: ButtonStyle = if *scope == self.panel.active_tab {
                button::primary
            } else {
                button::secondary
            };
            tabs.push(
                button(text(scope.to_string()))
                    .on_press(Message::TabSelected(*scope))
                    .style(style),
            )
        });

        let body = match self.panel.active_tab {
            Scope::Global => self.global_tab(),
            scope => self.scoped_tab(scope),
        };

        let content = column![header, tabs, body, self.preview(), self.actions()]
            .spacing(16)
            .padding(16)
            .width(Length::Fill);

        scrollable(content).height(Length::Fill).into()
    }
}

impl App {
    fn notice<'a>(&self, message: &'a str) -> Element<'a, Message> {
        let dialog = column![
            text(message),
            button("OK").on_press(Message::DismissNotice),
        ]
        .spacing(12)
        .max_width(420.0);

        container(container(dialog).padding(16).style(container::rounded_box))
            .center(Length::Fill)
            .into()
    }

    fn global_tab(&self) -> Element<'_, Message> {
        column![self.font_controls(Scope::Global), self.google_fonts_drawer()]
            .spacing(16)
            .into()
    }

    fn scoped_tab(&self, scope: Scope) -> Element<'_, Message> {
        let enabled = self.settings.override_enabled(scope);
        let label = match scope {
            Scope::User => "Use a different font for your messages",
            _ => "Use a different font for character messages",
        };
        let mut tab: Column<'_, Message> = column![
            checkbox(label, enabled).on_toggle(move |value| Message::OverrideToggled(scope, value))
        ]
        .spacing(12);
        if enabled {
            tab = tab.push(self.font_controls(scope));
        }
        tab.into()
    }

    fn font_controls(&self, scope: Scope) -> Element<'_, Message> {
        let family = text_input("Font family, e.g. Lora", self.panel.family_inputs.get(scope))
            .id(font_family_input_id(scope))
            .on_input(move |value| Message::FontFamilyInput(scope, value))
            .on_submit(Message::FontFamilySubmitted(scope));
        let clear = button(text("×"))
            .on_press(Message::ClearFontFamily(scope))
            .style(button::secondary);

        let weight = *self.panel.weight_inputs.get(scope);
        let weight_row = row![
            text("Weight"),
            slider(MIN_FONT_WEIGHT..=MAX_FONT_WEIGHT, weight, move |value| {
                Message::FontWeightChanged(scope, value)
            })
            .step(FONT_WEIGHT_STEP),
            text(format!("{weight}")).width(Length::Fixed(40.0)),
        ]
        .spacing(8)
        .align_y(Vertical::Center);

        column![
            row![family, clear].spacing(6).align_y(Vertical::Center),
            self.your_fonts(scope),
            weight_row,
        ]
        .spacing(10)
        .into()
    }

    fn your_fonts(&self, scope: Scope) -> Element<'_, Message> {
        let chips = font_chips(&self.settings, scope);
        let mut line = Row::new()
            .spacing(6)
            .align_y(Vertical::Center)
            .push(text("Your Fonts:").size(13.0));
        if chips.is_empty() {
            line = line.push(text(empty_chips_hint(scope)).size(13.0));
        } else {
            for chip in chips {
                line = line.push(font_chip(scope, chip));
            }
        }
        line.into()
    }

    fn google_fonts_drawer(&self) -> Element<'_, Message> {
        let open = self.panel.google_drawer_open;
        let toggle = button(text(if open {
            "▾ Google Fonts"
        } else {
            "▸ Google Fonts"
        }))
        .on_press(Message::ToggleGoogleFontsDrawer)
        .style(button::text);
        if !open {
            return toggle.into();
        }

        let rejected = self.panel.google_input_rejected;
        let input = text_input("Google Font name, e.g. Open Sans", &self.panel.google_input)
            .id(GOOGLE_FONT_INPUT_ID.clone())
            .on_input(Message::GoogleFontInputChanged)
            .on_submit(Message::ImportGoogleFont)
            .style(move |theme: &Theme, status| {
                let mut style = text_input::default(theme, status);
                if rejected {
                    style.border.color = Color::from_rgb8(0xff, 0x6b, 0x6b);
                }
                style
            });

        let imported: Element<'_, Message> = if self.settings.google_fonts.is_empty() {
            text("No fonts imported yet").size(13.0).into()
        } else {
            self.settings
                .google_fonts
                .iter()
                .fold(Column::new().spacing(4), |list, name| {
                    list.push(
                        row![
                            text(name.as_str()),
                            horizontal_space(),
                            button(text("×"))
                                .on_press(Message::RemoveFont(FontKind::Google, name.clone()))
                                .style(button::text),
                        ]
                        .align_y(Vertical::Center),
                    )
                })
                .into()
        };

        column![
            toggle,
            row![
                input,
                button("Import").on_press(Message::ImportGoogleFont)
            ]
            .spacing(6)
            .align_y(Vertical::Center),
            imported,
        ]
        .spacing(10)
        .into()
    }

    fn preview(&self) -> Element<'_, Message> {
        let styles = build_preview(&self.settings);
        column![
            text("Preview").size(18.0),
            self.preview_message("You", PREVIEW_USER_TEXT, Scope::User, styles.user),
            self.preview_message(
                "Character",
                PREVIEW_CHARACTER_TEXT,
                Scope::Character,
                styles.character
            ),
        ]
        .spacing(8)
        .into()
    }

    fn preview_message(
        &self,
        speaker: &'static str,
        sample: &'static str,
        scope: Scope,
        inline_style: String,
    ) -> Element<'_, Message> {
        let inline_style = if inline_style.is_empty() {
            "(default font)".to_string()
        } else {
            inline_style
        };
        container(
            column![
                text(speaker).size(12.0),
                text(sample).size(16.0).font(self.preview_font(scope)),
                text(inline_style).size(11.0),
            ]
            .spacing(4),
        )
        .padding(8)
        .width(Length::Fill)
        .style(container::rounded_box)
        .into()
    }

    fn preview_font(&self, scope: Scope) -> Font {
        let spec = self.settings.effective_spec(scope);
        display_font(&spec.font_family, spec.font_weight)
    }

    fn actions(&self) -> Element<'_, Message> {
        let export = button(if self.panel.export_copied {
            "✓ Copied!"
        } else {
            "Export"
        })
        .on_press(Message::ExportSettings);
        let import = button(if self.panel.import_done {
            "✓ Imported!"
        } else {
            "Import"
        })
        .on_press(Message::ImportSettings);

        let reset: Element<'_, Message> = if self.panel.reset_confirm {
            row![
                text("Reset all TypefaceR settings to defaults?"),
                button("Reset")
                    .on_press(Message::ConfirmReset)
                    .style(button::danger),
                button("Cancel")
                    .on_press(Message::CancelReset)
                    .style(button::secondary),
            ]
            .spacing(6)
            .align_y(Vertical::Center)
            .into()
        } else {
            button("Reset")
                .on_press(Message::RequestReset)
                .style(button::danger)
                .into()
        };

        row![export, import, horizontal_space(), reset]
            .spacing(8)
            .align_y(Vertical::Center)
            .into()
    }
}

fn font_chip<'a>(scope: Scope, chip: FontChip) -> Element<'a, Message> {
    let style: ButtonStyle = if chip.active {
        button::primary
    } else {
        button::secondary
    };
    let select = button(text(chip.label()).size(13.0).font(display_font(&chip.name, 400.0)))
        .on_press(Message::ChipSelected(scope, chip.name.clone()))
        .style(style);

    let body: Element<'a, Message> = match chip.kind {
        FontKind::Google => select.into(),
        FontKind::Local => row![
            select,
            button(text("×").size(13.0))
                .on_press(Message::RemoveFont(FontKind::Local, chip.name.clone()))
                .style(button::text),
        ]
        .spacing(2)
        .align_y(Vertical::Center)
        .into(),
    };

    tooltip(
        body,
        container(text(chip.tooltip()).size(12.0))
            .padding(6)
            .style(container::rounded_box),
        tooltip::Position::Bottom,
    )
    .into()
}
