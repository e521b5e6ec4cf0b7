/// X11 window with a Cairo xlib surface, feeding pointer and key input to the app.

use crate::core::types::{KeyEvent, MouseEvent};
use std::ffi::CString;
use std::ptr;
use thiserror::Error;
use x11::xlib;

#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("cannot open X11 display (is DISPLAY set?)")]
    DisplayUnavailable,
    #[error("window title contains a NUL byte")]
    InvalidTitle(#[from] std::ffi::NulError),
    #[error("window size {width}x{height} is not drawable")]
    InvalidSize { width: i32, height: i32 },
    #[error("failed to create Cairo surface for the window")]
    SurfaceCreation,
    #[error("failed to create Cairo context: {0}")]
    Context(String),
}

/// Input gathered during one `poll_events` call, in arrival order.
#[derive(Debug, Clone)]
pub enum PlatformEvent {
    Pointer(MouseEvent),
    Key(KeyEvent),
    Resized { width: i32, height: i32 },
}

pub struct WindowX11 {
    display: *mut xlib::Display,
    window: xlib::Window,
    screen: i32,
    width: i32,
    height: i32,
    wm_delete_window: xlib::Atom,
    should_close: bool,
    pending: Vec<PlatformEvent>,
}

impl WindowX11 {
    pub fn new() -> Self {
        Self {
            display: ptr::null_mut(),
            window: 0,
            screen: 0,
            width: 0,
            height: 0,
            wm_delete_window: 0,
            should_close: false,
            pending: Vec::new(),
        }
    }

    pub fn create(&mut self, width: i32, height: i32, title: &str) -> Result<(), PlatformError> {
        if width <= 0 || height <= 0 {
            return Err(PlatformError::InvalidSize { width, height });
        }
        let title_c = CString::new(title)?;
        let wm_delete = CString::new("WM_DELETE_WINDOW")?;

        unsafe {
            self.display = xlib::XOpenDisplay(ptr::null());
            if self.display.is_null() {
                return Err(PlatformError::DisplayUnavailable);
            }

            self.screen = xlib::XDefaultScreen(self.display);
            let root = xlib::XRootWindow(self.display, self.screen);
            let black = xlib::XBlackPixel(self.display, self.screen);

            self.window = xlib::XCreateSimpleWindow(
                self.display,
                root,
                0,
                0,
                width as u32,
                height as u32,
                0,
                black,
                black,
            );
            self.width = width;
            self.height = height;

            xlib::XStoreName(self.display, self.window, title_c.as_ptr());
            xlib::XSelectInput(
                self.display,
                self.window,
                xlib::ExposureMask
                    | xlib::ButtonPressMask
                    | xlib::ButtonReleaseMask
                    | xlib::PointerMotionMask
                    | xlib::KeyPressMask
                    | xlib::StructureNotifyMask,
            );

            self.wm_delete_window =
                xlib::XInternAtom(self.display, wm_delete.as_ptr(), xlib::False);
            xlib::XSetWMProtocols(
                self.display,
                self.window,
                &mut self.wm_delete_window as *mut _,
                1,
            );

            xlib::XMapWindow(self.display, self.window);
            xlib::XFlush(self.display);
        }

        log::info!("window created ({}x{})", width, height);
        Ok(())
    }

    /// Cairo context over the window at its current size.
    pub fn create_cairo_context(&self) -> Result<cairo::Context, PlatformError> {
        if self.display.is_null() {
            return Err(PlatformError::DisplayUnavailable);
        }
        unsafe {
            let visual = xlib::XDefaultVisual(self.display, self.screen);
            let surface_ptr = cairo_sys::cairo_xlib_surface_create(
                self.display,
                self.window,
                visual,
                self.width,
                self.height,
            );
            if surface_ptr.is_null() {
                return Err(PlatformError::SurfaceCreation);
            }

            let cr_ptr = cairo_sys::cairo_create(surface_ptr);
            // The context holds its own reference to the surface.
            cairo_sys::cairo_surface_destroy(surface_ptr);
            if cr_ptr.is_null() {
                return Err(PlatformError::Context("null context".to_string()));
            }

            let cr = cairo::Context::from_raw_full(cr_ptr);
            cr.status()
                .map_err(|e| PlatformError::Context(e.to_string()))?;
            Ok(cr)
        }
    }

    /// Collect pending X11 events. Returns false once the window was closed.
    pub fn poll_events(&mut self) -> bool {
        if self.should_close {
            return false;
        }

        unsafe {
            while xlib::XPending(self.display) > 0 {
                let mut event: xlib::XEvent = std::mem::zeroed();
                xlib::XNextEvent(self.display, &mut event);

                match event.get_type() {
                    xlib::ButtonPress | xlib::ButtonRelease => {
                        let btn = event.button;
                        // 4 and 5 are wheel steps; nothing here scrolls.
                        if btn.button >= 4 {
                            continue;
                        }
                        let pressed = event.get_type() == xlib::ButtonPress;
                        self.pending.push(PlatformEvent::Pointer(MouseEvent {
                            x: btn.x as f64,
                            y: btn.y as f64,
                            button: btn.button as u8,
                            pressed,
                            released: !pressed,
                        }));
                    }
                    xlib::MotionNotify => {
                        let motion = event.motion;
                        self.pending.push(PlatformEvent::Pointer(MouseEvent::moved(
                            motion.x as f64,
                            motion.y as f64,
                        )));
                    }
                    xlib::KeyPress => {
                        let key = event.key;
                        self.pending.push(PlatformEvent::Key(KeyEvent {
                            keycode: key.keycode,
                            pressed: true,
                            ctrl: key.state & xlib::ControlMask != 0,
                        }));
                    }
                    xlib::ConfigureNotify => {
                        let configure = event.configure;
                        if configure.width != self.width || configure.height != self.height {
                            self.width = configure.width;
                            self.height = configure.height;
                            log::debug!("window resized to {}x{}", self.width, self.height);
                            self.pending.push(PlatformEvent::Resized {
                                width: self.width,
                                height: self.height,
                            });
                        }
                    }
                    xlib::ClientMessage => {
                        let cm = event.client_message;
                        if cm.data.get_long(0) as xlib::Atom == self.wm_delete_window {
                            log::info!("window close requested");
                            self.should_close = true;
                            return false;
                        }
                    }
                    _ => {}
                }
            }
        }

        true
    }

    pub fn take_events(&mut self) -> Vec<PlatformEvent> {
        std::mem::take(&mut self.pending)
    }

    pub fn flush(&self) {
        if self.display.is_null() {
            return;
        }
        unsafe {
            xlib::XFlush(self.display);
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }
}

impl Default for WindowX11 {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for WindowX11 {
    fn drop(&mut self) {
        unsafe {
            if !self.display.is_null() {
                xlib::XDestroyWindow(self.display, self.window);
                xlib::XCloseDisplay(self.display);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_bad_geometry_before_touching_x() {
        let mut window = WindowX11::new();
        let err = window.create(0, 720, "x").unwrap_err();
        assert!(matches!(err, PlatformError::InvalidSize { width: 0, height: 720 }));
    }

    #[test]
    fn test_rejects_nul_in_title() {
        let mut window = WindowX11::new();
        let err = window.create(10, 10, "bad\0title").unwrap_err();
        assert!(matches!(err, PlatformError::InvalidTitle(_)));
        assert_eq!(err.to_string(), "window title contains a NUL byte");
    }

    #[test]
    fn test_no_context_without_display() {
        let window = WindowX11::new();
        assert!(matches!(
            window.create_cairo_context(),
            Err(PlatformError::DisplayUnavailable)
        ));
    }
}
