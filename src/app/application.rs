//! Application - App Initialization and Window Management
//!
//! Main entry point for the GPUI application.

use gpui::{
    AnyView, App, AppContext, Application, Bounds, TitlebarOptions, WindowBounds,
    WindowOptions, actions, px,
};
use gpui_component::Root;
use tracing::{error, info};

use crate::app::entities::AppEntities;
use crate::assets::Assets;
use crate::constants::{DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH};
use crate::domain::config::AppSettings;
use crate::features::earnings::page::EarningsPage;
use crate::i18n::{Locale, t};

actions!(earnings, [Quit]);

/// Run the application with the given settings
pub fn run_app(settings: AppSettings) {
    Application::new().with_assets(Assets).run(move |cx: &mut App| {
        gpui_component::init(cx);

        // Set up action handlers
        cx.on_action(|_: &Quit, cx: &mut App| cx.quit());

        // Quit the app when all windows are closed (macOS behavior)
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        let title = t(Locale::from_tag(&settings.locale), "app-title");

        // Initialize global entities
        let entities = AppEntities::init(settings, cx);
        cx.set_global(entities.clone());

        // Create main window
        let bounds = Bounds::centered(
            None,
            gpui::size(px(DEFAULT_WINDOW_WIDTH), px(DEFAULT_WINDOW_HEIGHT)),
            cx,
        );
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some(title),
                appears_transparent: false,
                traffic_light_position: None,
            }),
            ..Default::default()
        };

        let opened = cx.open_window(window_options, |window, cx| {
            let page = cx.new(|cx| EarningsPage::new(entities.clone(), cx));
            cx.new(|cx| Root::new(AnyView::from(page), window, cx))
        });

        match opened {
            Ok(_) => info!("main window opened"),
            Err(e) => {
                error!(error = %e, "failed to open main window");
                cx.quit();
                return;
            }
        }

        cx.activate(true);
    });
}
