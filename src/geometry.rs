// --- GEOMETRY ---
// Plain rectangle/point records and the maximized-bounds math.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Edge-based rectangle, same convention as Win32 `RECT` (right/bottom exclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.left && p.x < self.right && p.y >= self.top && p.y < self.bottom
    }

    pub fn is_empty(&self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }
}

/// Work area and full bounds of one monitor, queried fresh for every maximize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonitorWorkArea {
    pub work: Rect,
    pub monitor: Rect,
}

/// Mirror of the Win32 `MINMAXINFO` payload carried by `WM_GETMINMAXINFO`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MinMaxInfo {
    pub reserved: Point,
    pub max_size: Point,
    pub max_position: Point,
    pub min_track_size: Point,
    pub max_track_size: Point,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaximizedBounds {
    /// Relative to the monitor's top-left corner.
    pub position: Point,
    pub size: Point,
}

/// Bounds a maximized window must take so it covers the work area only,
/// never the taskbar.
pub fn maximized_bounds(area: &MonitorWorkArea) -> MaximizedBounds {
    let work = area.work;
    let monitor = area.monitor;
    MaximizedBounds {
        position: Point::new(
            (work.left - monitor.left).abs(),
            (work.top - monitor.top).abs(),
        ),
        size: Point::new(
            (work.right - work.left).abs(),
            (work.bottom - work.top).abs(),
        ),
    }
}

impl MinMaxInfo {
    pub fn apply_maximized_bounds(&mut self, bounds: MaximizedBounds) {
        self.max_position = bounds.position;
        self.max_size = bounds.size;
    }

    /// Raise the minimum track size to at least `min`, never lowering what
    /// the system already requires.
    pub fn enforce_min_track_size(&mut self, min: Point) {
        self.min_track_size.x = self.min_track_size.x.max(min.x);
        self.min_track_size.y = self.min_track_size.y.max(min.y);
    }
}

#[cfg(target_os = "windows")]
mod native {
    use super::*;
    use windows::Win32::Foundation::{POINT, RECT};
    use windows::Win32::UI::WindowsAndMessaging::MINMAXINFO;

    impl From<POINT> for Point {
        fn from(p: POINT) -> Self {
            Point::new(p.x, p.y)
        }
    }

    impl From<Point> for POINT {
        fn from(p: Point) -> Self {
            POINT { x: p.x, y: p.y }
        }
    }

    impl From<RECT> for Rect {
        fn from(r: RECT) -> Self {
            Rect::new(r.left, r.top, r.right, r.bottom)
        }
    }

    impl From<Rect> for RECT {
        fn from(r: Rect) -> Self {
            RECT {
                left: r.left,
                top: r.top,
                right: r.right,
                bottom: r.bottom,
            }
        }
    }

    impl From<&MINMAXINFO> for MinMaxInfo {
        fn from(mmi: &MINMAXINFO) -> Self {
            MinMaxInfo {
                reserved: mmi.ptReserved.into(),
                max_size: mmi.ptMaxSize.into(),
                max_position: mmi.ptMaxPosition.into(),
                min_track_size: mmi.ptMinTrackSize.into(),
                max_track_size: mmi.ptMaxTrackSize.into(),
            }
        }
    }

    impl MinMaxInfo {
        pub fn write_to(&self, mmi: &mut MINMAXINFO) {
            mmi.ptReserved = self.reserved.into();
            mmi.ptMaxSize = self.max_size.into();
            mmi.ptMaxPosition = self.max_position.into();
            mmi.ptMinTrackSize = self.min_track_size.into();
            mmi.ptMaxTrackSize = self.max_track_size.into();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bottom_taskbar_is_excluded() {
        let area = MonitorWorkArea {
            work: Rect::new(0, 0, 1920, 1040),
            monitor: Rect::new(0, 0, 1920, 1080),
        };
        let bounds = maximized_bounds(&area);
        assert_eq!(bounds.position, Point::new(0, 0));
        assert_eq!(bounds.size, Point::new(1920, 1040));
    }

    #[test]
    fn left_and_top_taskbars_offset_the_position() {
        let left = MonitorWorkArea {
            work: Rect::new(62, 0, 2560, 1440),
            monitor: Rect::new(0, 0, 2560, 1440),
        };
        let bounds = maximized_bounds(&left);
        assert_eq!(bounds.position, Point::new(62, 0));
        assert_eq!(bounds.size, Point::new(2498, 1440));

        let top = MonitorWorkArea {
            work: Rect::new(0, 48, 1920, 1080),
            monitor: Rect::new(0, 0, 1920, 1080),
        };
        let bounds = maximized_bounds(&top);
        assert_eq!(bounds.position, Point::new(0, 48));
        assert_eq!(bounds.size, Point::new(1920, 1032));
    }

    #[test]
    fn secondary_monitor_position_is_monitor_relative() {
        // Monitor to the left of the primary, taskbar at the bottom.
        let area = MonitorWorkArea {
            work: Rect::new(-1280, 0, 0, 984),
            monitor: Rect::new(-1280, 0, 0, 1024),
        };
        let bounds = maximized_bounds(&area);
        assert_eq!(bounds.position, Point::new(0, 0));
        assert_eq!(bounds.size, Point::new(1280, 984));
    }

    #[test]
    fn bounds_always_match_work_area() {
        let monitors = [
            Rect::new(0, 0, 1920, 1080),
            Rect::new(1920, -200, 4480, 1240),
            Rect::new(-1024, 0, 0, 768),
        ];
        for monitor in monitors {
            for inset in [0, 1, 40, 72] {
                let works = [
                    Rect::new(monitor.left, monitor.top, monitor.right, monitor.bottom - inset),
                    Rect::new(monitor.left + inset, monitor.top, monitor.right, monitor.bottom),
                    Rect::new(monitor.left, monitor.top + inset, monitor.right, monitor.bottom),
                    Rect::new(monitor.left, monitor.top, monitor.right - inset, monitor.bottom),
                ];
                for work in works {
                    let bounds = maximized_bounds(&MonitorWorkArea { work, monitor });
                    assert_eq!(bounds.position.x, work.left - monitor.left);
                    assert_eq!(bounds.position.y, work.top - monitor.top);
                    assert_eq!(bounds.size.x, work.width());
                    assert_eq!(bounds.size.y, work.height());
                }
            }
        }
    }

    #[test]
    fn min_track_size_only_grows() {
        let mut info = MinMaxInfo {
            min_track_size: Point::new(136, 39),
            ..Default::default()
        };
        info.enforce_min_track_size(Point::new(300, 30));
        assert_eq!(info.min_track_size, Point::new(300, 39));
    }

    #[test]
    fn rect_contains_is_half_open() {
        let r = Rect::new(10, 10, 20, 20);
        assert!(r.contains(Point::new(10, 10)));
        assert!(r.contains(Point::new(19, 19)));
        assert!(!r.contains(Point::new(20, 15)));
        assert!(!r.contains(Point::new(15, 20)));
    }
}
