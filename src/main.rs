//! Track Info - GPUI Application
//!
//! A native desktop form for collecting music track metadata and
//! submitting it by email as an Excel spreadsheet.

mod actions;
mod core;
mod export;
mod logging;
mod mail;
mod submit;
mod ui;

use gpui::{
    App, Application, Bounds, KeyBinding, Menu, MenuItem, WindowBounds, WindowHandle,
    WindowOptions, prelude::*, px, size,
};

use actions::{About, NewForm, OpenLogDir, Quit};
use ui::components::{AboutBox, TrackList};

/// Build the application menus
fn build_menus() -> Vec<Menu> {
    vec![
        Menu {
            name: "Track Info".into(),
            items: vec![
                MenuItem::action("About Track Info", About),
                MenuItem::separator(),
                MenuItem::action("Quit", Quit),
            ],
        },
        Menu {
            name: "File".into(),
            items: vec![MenuItem::action("New Form", NewForm)],
        },
        Menu {
            name: "Options".into(),
            items: vec![MenuItem::action("Open Log Folder", OpenLogDir)],
        },
    ]
}

fn main() {
    match logging::init_logging() {
        Some(path) => log::info!("Logging to {:?}", path),
        None => eprintln!("Warning: could not initialize log file"),
    }

    Application::new().run(|cx: &mut App| {
        // Register action handlers
        cx.on_action(|_: &Quit, cx| cx.quit());
        cx.on_action(|_: &About, cx| {
            AboutBox::open(cx);
        });
        cx.on_action(|_: &OpenLogDir, _cx| {
            if let Err(e) = logging::open_log_directory() {
                log::error!("{}", e);
            }
        });

        // Note: the NewForm handler is registered on the TrackList view itself
        // via on_action in render(). The view has focus, so it receives the
        // action dispatched from the menu item.

        // Bind keyboard shortcuts
        cx.bind_keys([
            KeyBinding::new("cmd-q", Quit, None),
            KeyBinding::new("cmd-n", NewForm, None),
        ]);

        // Set up the application menu
        cx.set_menus(build_menus());

        // Open the main window
        let bounds = Bounds::centered(None, size(px(900.), px(640.)), cx);

        let window_handle: WindowHandle<TrackList> = cx
            .open_window(
                WindowOptions {
                    window_bounds: Some(WindowBounds::Windowed(bounds)),
                    window_min_size: Some(size(px(600.), px(400.))),
                    titlebar: Some(gpui::TitlebarOptions {
                        title: Some("Track Info".into()),
                        appears_transparent: false,
                        traffic_light_position: None,
                    }),
                    ..Default::default()
                },
                |_window, cx| cx.new(TrackList::new),
            )
            .unwrap();

        // Quit the app when the main window is closed
        // This is appropriate for a single-window utility app
        cx.on_window_closed(|cx| {
            cx.quit();
        })
        .detach();

        // window_handle keeps the window alive
        let _ = window_handle;

        cx.activate(true);
    });
}
