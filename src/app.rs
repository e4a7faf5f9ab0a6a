//! Menu bar application loop
//!
//! Tray and menu events are forwarded into a winit event loop and handled
//! on the main thread, one at a time. A selection blocks the loop until
//! its stop/start/switch commands finish.

use anyhow::{Context, Result};
use tracing::{debug, error, info};
use tray_icon::menu::MenuEvent;
use tray_icon::{MouseButtonState, TrayIconEvent};
use winit::event::{Event, StartCause};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::platform::macos::{ActivationPolicy, EventLoopBuilderExtMacOS};

use crate::config::Config;
use crate::controller::{MenuAction, MenuController, Outcome};
use crate::error::ResultExt;
use crate::runner::ShellRunner;
use crate::tray::TrayManager;

#[derive(Debug)]
enum UserEvent {
    Tray(TrayIconEvent),
    Menu(MenuEvent),
}

/// Run the status item until the user quits.
pub fn run(config: Config) -> Result<()> {
    let event_loop = EventLoop::<UserEvent>::with_user_event()
        .with_activation_policy(ActivationPolicy::Accessory) // no Dock icon
        .build()
        .context("Failed to create event loop")?;

    let proxy = event_loop.create_proxy();
    TrayIconEvent::set_event_handler(Some(move |event| {
        let _ = proxy.send_event(UserEvent::Tray(event));
    }));
    let proxy = event_loop.create_proxy();
    MenuEvent::set_event_handler(Some(move |event| {
        let _ = proxy.send_event(UserEvent::Menu(event));
    }));

    let runner = ShellRunner::new(config.shell.clone());
    let mut controller = MenuController::new(runner, config);
    let mut tray: Option<TrayManager> = None;

    #[allow(deprecated)]
    let run_result = event_loop.run(move |event, event_loop| match event {
        Event::NewEvents(StartCause::Init) => {
            event_loop.set_control_flow(ControlFlow::Wait);
            controller.start();
            // The tray must be created once the app is running on macOS
            match TrayManager::new(controller.title(), &controller.menu_entries()) {
                Ok(manager) => tray = Some(manager),
                Err(e) => {
                    error!(error = ?e, "Failed to create status item");
                    event_loop.exit();
                }
            }
        }
        Event::UserEvent(UserEvent::Tray(event)) => {
            let opening = matches!(
                event,
                TrayIconEvent::Enter { .. }
                    | TrayIconEvent::Click {
                        button_state: MouseButtonState::Down,
                        ..
                    }
            );
            if !opening {
                return;
            }
            let Some(tray) = tray.as_ref() else {
                return;
            };
            controller.refresh();
            tray.set_menu(&controller.menu_entries()).log_err();
        }
        Event::UserEvent(UserEvent::Menu(event)) => {
            let Some(action) = MenuAction::from_id(&event.id.0) else {
                debug!(id = %event.id.0, "Ignoring unknown menu event");
                return;
            };
            let Some(tray) = tray.as_ref() else {
                return;
            };
            match controller.handle(&action, |title| tray.set_title(title)) {
                Outcome::Redraw => {
                    tray.set_menu(&controller.menu_entries()).log_err();
                }
                Outcome::Ignored => {}
                Outcome::Quit => {
                    info!(event_type = "app_lifecycle", action = "quit", "Exiting");
                    event_loop.exit();
                }
            }
        }
        _ => {}
    });

    run_result.context("Event loop terminated with an error")
}
