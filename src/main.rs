// SPDX-License-Identifier: MPL-2.0
use newsreel::app;

fn main() -> iced::Result {
    app::run()
}
