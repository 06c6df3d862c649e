mod all;
mod app_form;
mod board;
mod clock;
mod elements;
mod footer;
mod label_form;
mod log;
mod main;
mod picker;
mod rss;
mod status;
mod welcome;
mod widget_form;

use self::log::log;
use super::*;
use elements::elements;
use footer::footer;
use main::main;
use status::status;

pub use all::all as render;
