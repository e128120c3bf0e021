use std::fmt;
use std::str::FromStr;

use actix_session::Session;

use crate::errors::AppError;
use crate::models::role::Role;

const PAGE_KEY: &str = "page";
const ROLE_KEY: &str = "role";
const FLASH_KEY: &str = "flash";
const FLASH_ERROR_KEY: &str = "flash_error";

/// The screen a session is currently on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Welcome,
    Login,
    Dashboard,
}

impl Page {
    pub fn name(&self) -> &'static str {
        match self {
            Page::Welcome => "welcome",
            Page::Login => "login",
            Page::Dashboard => "dashboard",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Page {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "welcome" => Ok(Page::Welcome),
            "login" => Ok(Page::Login),
            "dashboard" => Ok(Page::Dashboard),
            other => Err(format!("unknown page '{other}'")),
        }
    }
}

/// The role slot as read back from the cookie. A stored name that no longer
/// parses is kept verbatim so the router can report it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RoleSlot {
    #[default]
    Unset,
    Known(Role),
    Unrecognized(String),
}

impl RoleSlot {
    pub fn role(&self) -> Option<Role> {
        match self {
            RoleSlot::Known(role) => Some(*role),
            _ => None,
        }
    }
}

impl From<Option<Role>> for RoleSlot {
    fn from(role: Option<Role>) -> Self {
        role.map_or(RoleSlot::Unset, RoleSlot::Known)
    }
}

/// Per-browser navigation state: which screen, and as which role.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionState {
    pub page: Page,
    pub role: RoleSlot,
}

impl SessionState {
    pub fn new(page: Page, role: Option<Role>) -> Self {
        Self { page, role: role.into() }
    }

    /// Overwrite both fields. There is no partial update.
    pub fn go_to(&mut self, page: Page, role: Option<Role>) {
        self.page = page;
        self.role = role.into();
    }

    /// Read the state from the session. `None` when no page has been stored
    /// yet or the stored page is not a screen name.
    pub fn read(session: &Session) -> Option<Self> {
        let page = session
            .get::<String>(PAGE_KEY)
            .unwrap_or(None)?
            .parse::<Page>()
            .ok()?;
        let role = match session.get::<String>(ROLE_KEY).unwrap_or(None) {
            None => RoleSlot::Unset,
            Some(raw) => match raw.parse::<Role>() {
                Ok(role) => RoleSlot::Known(role),
                Err(_) => RoleSlot::Unrecognized(raw),
            },
        };
        Some(Self { page, role })
    }

    /// Read the state, storing the initial state if the session has none.
    pub fn load_or_init(session: &Session) -> Result<Self, AppError> {
        match Self::read(session) {
            Some(state) => Ok(state),
            None => {
                let state = Self::default();
                state.save(session)?;
                Ok(state)
            }
        }
    }

    pub fn save(&self, session: &Session) -> Result<(), AppError> {
        session.insert(PAGE_KEY, self.page.name())?;
        match &self.role {
            RoleSlot::Unset => {
                session.remove(ROLE_KEY);
            }
            RoleSlot::Known(role) => session.insert(ROLE_KEY, role.name())?,
            RoleSlot::Unrecognized(raw) => session.insert(ROLE_KEY, raw)?,
        }
        Ok(())
    }
}

/// Transition the session to `page` as `role`, overwriting whatever was there.
pub fn go_to(session: &Session, page: Page, role: Option<Role>) -> Result<SessionState, AppError> {
    let mut state = SessionState::read(session).unwrap_or_default();
    state.go_to(page, role);
    state.save(session)?;
    match role {
        Some(role) => log::info!("Session navigated to {page} as {role}"),
        None => log::info!("Session navigated to {page}"),
    }
    Ok(state)
}

pub fn set_flash(session: &Session, message: &str) -> Result<(), AppError> {
    session.insert(FLASH_KEY, message)?;
    Ok(())
}

pub fn set_flash_error(session: &Session, message: &str) -> Result<(), AppError> {
    session.insert(FLASH_ERROR_KEY, message)?;
    Ok(())
}

pub fn take_flash(session: &Session) -> Option<String> {
    let flash = session.get::<String>(FLASH_KEY).unwrap_or(None);
    if flash.is_some() {
        session.remove(FLASH_KEY);
    }
    flash
}

pub fn take_flash_error(session: &Session) -> Option<String> {
    let flash = session.get::<String>(FLASH_ERROR_KEY).unwrap_or(None);
    if flash.is_some() {
        session.remove(FLASH_ERROR_KEY);
    }
    flash
}

/// Check the session is on `role`'s dashboard; returns Err(AppError) if not.
pub fn require_role(session: &Session, role: Role) -> Result<(), AppError> {
    let state = SessionState::read(session).unwrap_or_default();
    if state.page == Page::Dashboard && state.role == RoleSlot::Known(role) {
        Ok(())
    } else {
        Err(AppError::PermissionDenied(format!("{role} dashboard")))
    }
}
