// --- CHROME PROPERTIES ---
// Bindable appearance values with explicit change notification.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const LIGHT_GRAY: Rgb = Rgb::new(0xD3, 0xD3, 0xD3);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

pub const DEFAULT_OPACITY: f64 = 0.6;
pub const DEFAULT_NOISE_RATIO: f64 = 0.1;

/// Identifies which property changed. Passed explicitly to listeners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChromeProperty {
    TransparentBackground,
    AcrylOpacity,
    NoiseRatio,
    ShowMinimizeButton,
    ShowMaximizeButton,
    ShowCloseButton,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChromeAppearance {
    pub transparent_background: Rgb,
    pub acryl_opacity: f64,
    pub noise_ratio: f64,
    pub show_minimize_button: bool,
    pub show_maximize_button: bool,
    pub show_close_button: bool,
}

impl Default for ChromeAppearance {
    fn default() -> Self {
        Self {
            transparent_background: Rgb::LIGHT_GRAY,
            acryl_opacity: DEFAULT_OPACITY,
            noise_ratio: DEFAULT_NOISE_RATIO,
            show_minimize_button: true,
            show_maximize_button: true,
            show_close_button: true,
        }
    }
}

impl ChromeAppearance {
    /// Clamp ratios into [0, 1]; NaN falls back to the default.
    pub fn normalized(mut self) -> Self {
        self.acryl_opacity = clamp_unit(self.acryl_opacity, DEFAULT_OPACITY);
        self.noise_ratio = clamp_unit(self.noise_ratio, DEFAULT_NOISE_RATIO);
        self
    }
}

fn clamp_unit(value: f64, fallback: f64) -> f64 {
    if value.is_nan() {
        fallback
    } else {
        value.clamp(0.0, 1.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(ChromeProperty, &ChromeAppearance)>;

pub struct ChromeProperties {
    values: ChromeAppearance,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

impl Default for ChromeProperties {
    fn default() -> Self {
        Self::new(ChromeAppearance::default())
    }
}

impl ChromeProperties {
    pub fn new(values: ChromeAppearance) -> Self {
        Self {
            values: values.normalized(),
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    pub fn values(&self) -> &ChromeAppearance {
        &self.values
    }

    pub fn subscribe(
        &mut self,
        listener: impl FnMut(ChromeProperty, &ChromeAppearance) + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sub, _)| *sub != id);
        self.listeners.len() != before
    }

    pub fn set_transparent_background(&mut self, color: Rgb) {
        self.values.transparent_background = color;
        self.notify(ChromeProperty::TransparentBackground);
    }

    pub fn set_acryl_opacity(&mut self, opacity: f64) {
        self.values.acryl_opacity = clamp_unit(opacity, DEFAULT_OPACITY);
        self.notify(ChromeProperty::AcrylOpacity);
    }

    pub fn set_noise_ratio(&mut self, ratio: f64) {
        self.values.noise_ratio = clamp_unit(ratio, DEFAULT_NOISE_RATIO);
        self.notify(ChromeProperty::NoiseRatio);
    }

    pub fn set_show_minimize_button(&mut self, visible: bool) {
        self.values.show_minimize_button = visible;
        self.notify(ChromeProperty::ShowMinimizeButton);
    }

    pub fn set_show_maximize_button(&mut self, visible: bool) {
        self.values.show_maximize_button = visible;
        self.notify(ChromeProperty::ShowMaximizeButton);
    }

    pub fn set_show_close_button(&mut self, visible: bool) {
        self.values.show_close_button = visible;
        self.notify(ChromeProperty::ShowCloseButton);
    }

    fn notify(&mut self, property: ChromeProperty) {
        let mut listeners = std::mem::take(&mut self.listeners);
        for (_, listener) in listeners.iter_mut() {
            listener(property, &self.values);
        }
        self.listeners = listeners;
    }
}
