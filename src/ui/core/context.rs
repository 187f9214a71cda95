use crate::{
    config::Config,
    errors::ShellError,
    icons::IconService,
    logger::Logger,
    ui::core::drawer::DrawerHandle,
};

/// Shared application context, built once at the root and passed by
/// reference to every component constructor.
pub struct AppContext {
    drawer: Option<DrawerHandle>,
    pub config: Config,
    pub icons: IconService,
    pub logger: Logger,
}

impl AppContext {
    pub fn new(config: Config, logger: Logger) -> Self {
        let icons = IconService::new(config.display.icon_theme);
        Self {
            drawer: Some(DrawerHandle::new()),
            config,
            icons,
            logger,
        }
    }

    /// Context with no drawer handle wired in.
    ///
    /// Components that need the drawer fail at construction time with
    /// [`ShellError::DrawerUnwired`] instead of defaulting to a drawer
    /// that can never open.
    pub fn without_drawer(config: Config, logger: Logger) -> Self {
        let icons = IconService::new(config.display.icon_theme);
        Self {
            drawer: None,
            config,
            icons,
            logger,
        }
    }

    /// The shared drawer handle, or [`ShellError::DrawerUnwired`] when this
    /// context was built without one.
    pub fn drawer(&self) -> Result<DrawerHandle, ShellError> {
        self.drawer.clone().ok_or(ShellError::DrawerUnwired)
    }
}
