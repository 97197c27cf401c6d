use super::super::super::messages::Message;
use super::super::super::state::{App, font_family_input_id};
use super::super::Effect;
use iced::Task;
use iced::clipboard;
use iced::widget::text_input;
use iced::window;
use tracing::{debug, info};

impl App {
    pub(super) fn run_effect(&mut self, effect: Effect) -> Task<Message> {
        match effect {
            Effect::PersistSettings => {
                self.persist_now();
                Task::none()
            }
            Effect::ApplyFontRules => {
                self.apply_font_rules();
                Task::none()
            }
            Effect::ApplyFontImports => {
                self.apply_font_imports();
                Task::none()
            }
            Effect::Schedule(ticket) => Task::perform(
                async move {
                    tokio::time::sleep(ticket.delay).await;
                    ticket
                },
                Message::DebounceElapsed,
            ),
            Effect::WriteClipboard(contents) => {
                info!(bytes = contents.len(), "Settings exported to clipboard");
                clipboard::write(contents)
            }
            Effect::ReadClipboard => {
                debug!("Reading settings snapshot from clipboard");
                clipboard::read().map(Message::ClipboardRead)
            }
            Effect::FocusFontFamily(scope) => text_input::focus(font_family_input_id(scope)),
            Effect::Close(id) => window::close(id),
        }
    }
}
