use crate::state::{Focus, State};
use anyhow::Result;
use clipboard::{ClipboardContext, ClipboardProvider};
use crossterm::{
    event,
    event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyModifiers},
};
use log::*;
use std::{sync::mpsc, thread, time::Duration};

/// Specify terminal event poll rate in milliseconds.
///
const TICK_RATE_IN_MS: u64 = 60;

/// Specify different terminal event types.
///
#[derive(Debug)]
pub enum Event<I> {
    Input(I),
    Tick,
}

/// Specify struct for managing terminal events channel.
///
pub struct Handler {
    rx: mpsc::Receiver<Event<KeyEvent>>,
    _tx: mpsc::Sender<Event<KeyEvent>>,
}

impl Handler {
    /// Return new instance after spawning new input polling thread.
    ///
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        let tx_clone = tx.clone();
        thread::spawn(move || loop {
            let tick_rate = Duration::from_millis(TICK_RATE_IN_MS);
            if event::poll(tick_rate).unwrap() {
                if let CrosstermEvent::Key(key) = event::read().unwrap() {
                    tx_clone.send(Event::Input(key)).unwrap();
                }
            }
            tx_clone.send(Event::Tick).unwrap();
        });
        Handler { rx, _tx: tx }
    }

    /// Receive next terminal event and handle it accordingly. Returns result
    /// with value true if should continue or false if exit was requested.
    ///
    pub fn handle_next(&self, state: &mut State) -> Result<bool> {
        match self.rx.recv()? {
            Event::Input(event) => match event {
                KeyEvent {
                    code: KeyCode::Char('c'),
                    modifiers: KeyModifiers::CONTROL,
                    ..
                } => {
                    debug!("Processing exit terminal event '{:?}'...", event);
                    return Ok(false);
                }
                // The description text area takes every key except Esc while
                // it is being edited.
                key_event
                    if state.is_description_editing() && key_event.code != KeyCode::Esc =>
                {
                    if let Some(form) = state.get_app_form_mut() {
                        form.description.input(key_event);
                    }
                }
                // Character keys go to the open form field before anything
                // else gets a chance to interpret them.
                KeyEvent {
                    code: KeyCode::Char(c),
                    modifiers: KeyModifiers::NONE,
                    ..
                } if state.is_form_text_entry() => {
                    state.form_input_char(c);
                }
                KeyEvent {
                    code: KeyCode::Char(c),
                    modifiers: KeyModifiers::SHIFT,
                    ..
                } if state.is_form_text_entry() => {
                    state.form_input_char(c);
                }
                KeyEvent {
                    code: KeyCode::Backspace,
                    modifiers: KeyModifiers::NONE,
                    ..
                } if state.is_form_text_entry() => {
                    state.form_delete_char();
                }
                KeyEvent {
                    code: KeyCode::Enter,
                    modifiers: KeyModifiers::NONE,
                    ..
                } => {
                    if state.is_picker_open() {
                        state.picker_select();
                    } else if state.is_theme_selector_open() {
                        state.select_theme();
                    } else if state.get_delete_confirmation().is_some() {
                        state.confirm_delete();
                    } else if state.get_label_form().is_some() {
                        state.submit_label_form();
                    } else if state.is_field_editing_mode() {
                        state.set_field_editing_mode(false);
                    } else if let Some(form) = state.get_app_form_mut() {
                        if form.field.is_toggle() {
                            form.toggle();
                        } else {
                            state.set_field_editing_mode(true);
                        }
                    } else if let Some(form) = state.get_widget_form_mut() {
                        if form.field.is_toggle() {
                            form.toggle();
                        } else {
                            state.set_field_editing_mode(true);
                        }
                    } else if let Some(url) = state.selected_launch_url() {
                        copy_to_clipboard(url, "app launch URL");
                    }
                }
                KeyEvent {
                    code: KeyCode::Esc,
                    modifiers: KeyModifiers::NONE,
                    ..
                } => {
                    if state.is_field_editing_mode() {
                        state.set_field_editing_mode(false);
                    } else if state.is_picker_open() {
                        state.close_picker();
                    } else if state.get_delete_confirmation().is_some() {
                        state.cancel_delete();
                    } else if state.is_theme_selector_open() {
                        state.close_theme_selector();
                    } else if state.get_app_form().is_some() {
                        state.close_app_form();
                    } else if state.get_widget_form().is_some() {
                        state.close_widget_form();
                    } else if state.get_label_form().is_some() {
                        state.close_label_form();
                    }
                }
                KeyEvent {
                    code: KeyCode::Tab,
                    modifiers: KeyModifiers::NONE,
                    ..
                } if !state.is_field_editing_mode() => {
                    if state.is_picker_open() {
                        state.picker_next_group();
                    } else if let Some(form) = state.get_app_form_mut() {
                        form.next_field();
                    } else if let Some(form) = state.get_widget_form_mut() {
                        form.next_field();
                    } else if !state.is_modal_open() {
                        state.cycle_focus();
                    }
                }
                KeyEvent {
                    code: KeyCode::Char('j'),
                    modifiers: KeyModifiers::NONE,
                    ..
                } => {
                    if state.is_picker_open() {
                        state.picker_next_entry();
                    } else if state.is_theme_selector_open() {
                        state.next_theme_dropdown_index();
                    } else if let Some(form) = state.get_app_form_mut() {
                        form.next_field();
                    } else if let Some(form) = state.get_widget_form_mut() {
                        form.next_field();
                    } else if !state.is_modal_open() {
                        match state.current_focus() {
                            Focus::Menu => {
                                state.next_sidebar_index();
                            }
                            Focus::View => {
                                state.next_feed_item();
                            }
                        }
                    }
                }
                KeyEvent {
                    code: KeyCode::Char('k'),
                    modifiers: KeyModifiers::NONE,
                    ..
                } => {
                    if state.is_picker_open() {
                        state.picker_previous_entry();
                    } else if state.is_theme_selector_open() {
                        state.previous_theme_dropdown_index();
                    } else if let Some(form) = state.get_app_form_mut() {
                        form.previous_field();
                    } else if let Some(form) = state.get_widget_form_mut() {
                        form.previous_field();
                    } else if !state.is_modal_open() {
                        match state.current_focus() {
                            Focus::Menu => {
                                state.previous_sidebar_index();
                            }
                            Focus::View => {
                                state.previous_feed_item();
                            }
                        }
                    }
                }
                KeyEvent {
                    code: KeyCode::Char('h'),
                    modifiers: KeyModifiers::NONE,
                    ..
                } => {
                    if state.is_picker_open() {
                        state.picker_previous_group();
                    } else if !state.is_modal_open() {
                        state.focus_menu();
                    }
                }
                KeyEvent {
                    code: KeyCode::Char('l'),
                    modifiers: KeyModifiers::NONE,
                    ..
                } => {
                    if state.is_picker_open() {
                        state.picker_next_group();
                    } else if !state.is_modal_open() {
                        state.focus_view();
                    }
                }
                KeyEvent {
                    code: KeyCode::Char('s'),
                    modifiers: KeyModifiers::NONE,
                    ..
                } => {
                    if state.get_app_form().is_some() {
                        state.submit_app_form();
                    } else if state.get_widget_form().is_some() {
                        state.submit_widget_form();
                    }
                }
                KeyEvent {
                    code: KeyCode::Char('a'),
                    modifiers: KeyModifiers::NONE,
                    ..
                } => {
                    if !state.is_modal_open() {
                        state.open_picker();
                    }
                }
                KeyEvent {
                    code: KeyCode::Char('e'),
                    modifiers: KeyModifiers::NONE,
                    ..
                } => {
                    if !state.is_modal_open() {
                        state.edit_selected_element();
                    }
                }
                KeyEvent {
                    code: KeyCode::Char('x'),
                    modifiers: KeyModifiers::NONE,
                    ..
                } => {
                    if !state.is_modal_open() {
                        state.request_delete_selected();
                    }
                }
                KeyEvent {
                    code: KeyCode::Char('r'),
                    modifiers: KeyModifiers::NONE,
                    ..
                } => {
                    if !state.is_modal_open() {
                        state.refresh_board();
                    }
                }
                KeyEvent {
                    code: KeyCode::Char('t'),
                    modifiers: KeyModifiers::NONE,
                    ..
                } => {
                    if !state.is_modal_open() {
                        state.open_theme_selector();
                    }
                }
                KeyEvent {
                    code: KeyCode::Char('d'),
                    modifiers: KeyModifiers::NONE,
                    ..
                } => {
                    if !state.is_modal_open() {
                        state.toggle_debug_mode();
                    }
                }
                KeyEvent {
                    code: KeyCode::Char('y'),
                    modifiers: KeyModifiers::NONE,
                    ..
                } => {
                    if !state.is_modal_open() {
                        if let Some(link) = state.selected_feed_item_link() {
                            copy_to_clipboard(link, "feed item link");
                        }
                    }
                }
                KeyEvent {
                    code: KeyCode::Char('q'),
                    modifiers: KeyModifiers::NONE,
                    ..
                } => {
                    if !state.is_modal_open() {
                        debug!("Processing exit terminal event '{:?}'...", event);
                        return Ok(false);
                    }
                }
                _ => {}
            },
            Event::Tick => {
                state.on_tick();
            }
        }
        Ok(true)
    }
}

/// Place text on the system clipboard, logging the outcome.
///
fn copy_to_clipboard(text: String, description: &str) {
    match ClipboardContext::new() {
        Ok(mut ctx) => match ctx.set_contents(text) {
            Ok(_) => info!("Copied {} to clipboard", description),
            Err(e) => warn!("Failed to copy to clipboard: {}", e),
        },
        Err(e) => warn!("Failed to initialize clipboard: {}", e),
    }
}
