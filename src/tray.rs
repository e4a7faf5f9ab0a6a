//! Menu bar status item for colima instances
//!
//! Provides a TrayManager that shows a template icon plus a short title
//! (the active instance's architecture) and a dropdown with one item per
//! instance and a quit item.

use anyhow::{Context, Result};
use tray_icon::{
    menu::{
        accelerator::{Accelerator, Code, Modifiers},
        Menu, MenuItem, PredefinedMenuItem,
    },
    Icon, TrayIcon, TrayIconBuilder,
};

use crate::controller::{MenuEntry, QUIT_ID, QUIT_LABEL};

/// Container glyph (32x32, monochrome), rendered as a template image on
/// macOS for light/dark mode adaptation
const LOGO_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="32" height="32" viewBox="0 0 32 32">
  <path fill="#000" d="M16 2 3 9v14l13 7 13-7V9L16 2Zm0 3.4 9.2 4.9L16 15.2 6.8 10.3 16 5.4ZM6 12.8l8.5 4.6v9.1L6 21.9v-9.1Zm11.5 13.7v-9.1l8.5-4.6v9.1l-8.5 4.6Z"/>
</svg>"#;

const TOOLTIP: &str = "colima instances";

/// Owns the tray icon; must live on the main thread.
pub struct TrayManager {
    tray_icon: TrayIcon,
}

impl TrayManager {
    /// Creates the status item with an initial title and menu.
    ///
    /// # Errors
    /// Returns an error if the icon cannot be rendered or the tray icon
    /// cannot be created.
    pub fn new(title: &str, entries: &[MenuEntry]) -> Result<Self> {
        let icon = Self::create_icon_from_svg()?;
        let menu = Self::create_menu(entries)?;

        let tray_icon = TrayIconBuilder::new()
            .with_icon(icon)
            .with_icon_as_template(true) // macOS: adapt to light/dark menu bar
            .with_title(title)
            .with_tooltip(TOOLTIP)
            .with_menu(Box::new(menu))
            .build()
            .context("Failed to create tray icon")?;

        Ok(Self { tray_icon })
    }

    pub fn set_title(&self, title: &str) {
        self.tray_icon.set_title(Some(title));
    }

    /// Replace the dropdown with one built from `entries`.
    pub fn set_menu(&self, entries: &[MenuEntry]) -> Result<()> {
        let menu = Self::create_menu(entries)?;
        self.tray_icon.set_menu(Some(Box::new(menu)));
        Ok(())
    }

    /// Converts the embedded SVG logo to an RGBA icon
    fn create_icon_from_svg() -> Result<Icon> {
        let opts = usvg::Options::default();
        let tree = usvg::Tree::from_str(LOGO_SVG, &opts).context("Failed to parse SVG")?;

        let size = tree.size();
        let width = size.width() as u32;
        let height = size.height() as u32;

        let mut pixmap =
            tiny_skia::Pixmap::new(width, height).context("Failed to create pixmap")?;

        // Template images only use the alpha channel; macOS colorizes them
        resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

        Icon::from_rgba(pixmap.take(), width, height)
            .context("Failed to create icon from RGBA data")
    }

    /// Menu structure:
    /// 1. one item per instance (`name  arch  status`), id `instance:<name>`
    /// 2. ---
    /// 3. quit (Cmd+Q)
    fn create_menu(entries: &[MenuEntry]) -> Result<Menu> {
        let menu = Menu::new();

        for entry in entries {
            let item = MenuItem::with_id(entry.id.as_str(), &entry.label, true, None);
            menu.append(&item)
                .with_context(|| format!("Failed to add menu item {}", entry.id))?;
        }

        menu.append(&PredefinedMenuItem::separator())
            .context("Failed to add separator")?;

        let quit_item = MenuItem::with_id(
            QUIT_ID,
            QUIT_LABEL,
            true,
            Some(Accelerator::new(Some(Modifiers::SUPER), Code::KeyQ)),
        );
        menu.append(&quit_item).context("Failed to add Quit item")?;

        Ok(menu)
    }
}
