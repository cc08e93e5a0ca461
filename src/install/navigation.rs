#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    SignIn,
    Init,
}

impl Route {
    pub fn as_path(self) -> &'static str {
        match self {
            Route::SignIn => "/signin",
            Route::Init => "/init",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationMode {
    /// Reloads the application shell.
    FullReload,
    ClientSide,
}

impl NavigationMode {
    pub fn as_str(self) -> &'static str {
        match self {
            NavigationMode::FullReload => "full_reload",
            NavigationMode::ClientSide => "client_side",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigation {
    pub route: Route,
    pub mode: NavigationMode,
}

impl Navigation {
    pub fn full_reload(route: Route) -> Self {
        Self {
            route,
            mode: NavigationMode::FullReload,
        }
    }

    pub fn client_side(route: Route) -> Self {
        Self {
            route,
            mode: NavigationMode::ClientSide,
        }
    }
}
