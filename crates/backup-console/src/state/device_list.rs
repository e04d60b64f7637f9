//! Device List State

use backup_client::Device;
use std::cmp::Ordering;

/// Sortable device table column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    Hostname,
    Ip,
    Username,
    DeviceType,
}

impl SortColumn {
    /// Column for a number key, `1` = hostname
    pub fn from_digit(digit: char) -> Option<Self> {
        match digit {
            '1' => Some(Self::Hostname),
            '2' => Some(Self::Ip),
            '3' => Some(Self::Username),
            '4' => Some(Self::DeviceType),
            _ => None,
        }
    }

    fn key<'a>(&self, device: &'a Device) -> &'a str {
        match self {
            Self::Hostname => &device.hostname,
            Self::Ip => &device.ip,
            Self::Username => &device.username,
            Self::DeviceType => &device.device_type,
        }
    }
}

/// Active sort of the device table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceSort {
    pub column: SortColumn,
    pub ascending: bool,
}

impl DeviceSort {
    /// Case-insensitive text order of the column, reversed when descending
    fn compare(&self, a: &Device, b: &Device) -> Ordering {
        let a = self.column.key(a).to_lowercase();
        let b = self.column.key(b).to_lowercase();
        let order = a.cmp(&b);
        if self.ascending {
            order
        } else {
            order.reverse()
        }
    }
}

/// Device list screen state
#[derive(Debug, Clone, Default)]
pub struct DeviceListState {
    /// All devices, in backend order
    pub devices: Vec<Device>,
    /// Cursor position within the filtered devices
    pub cursor: usize,
    /// Case-insensitive filter over hostname, IP, user and type
    pub filter: String,
    /// Whether keystrokes go to the filter input
    pub filter_editing: bool,
    pub loading: bool,
    pub error: Option<String>,
    /// Backend index of the device currently being backed up
    pub backup_running: Option<usize>,
    /// A backup of all devices is running
    pub bulk_backup_running: bool,
    /// `None` keeps backend order
    pub sort: Option<DeviceSort>,
}

impl DeviceListState {
    /// Devices matching the filter, in sort order
    pub fn filtered(&self) -> Vec<&Device> {
        let mut devices: Vec<&Device> = self
            .devices
            .iter()
            .filter(|d| d.matches(&self.filter))
            .collect();
        if let Some(sort) = self.sort {
            devices.sort_by(|a, b| sort.compare(a, b));
        }
        devices
    }

    /// Sort by `column`; the active column flips direction instead
    pub fn sort_by(&mut self, column: SortColumn) {
        self.sort = Some(match self.sort {
            Some(sort) if sort.column == column => DeviceSort {
                column,
                ascending: !sort.ascending,
            },
            _ => DeviceSort {
                column,
                ascending: true,
            },
        });
        self.cursor = 0;
    }

    /// Whether a single or bulk backup is in flight
    pub fn backup_in_progress(&self) -> bool {
        self.bulk_backup_running || self.backup_running.is_some()
    }

    /// Whether the device at backend `index` is being backed up
    pub fn is_backing_up(&self, index: usize) -> bool {
        self.bulk_backup_running || self.backup_running == Some(index)
    }

    /// Device under the cursor
    pub fn selected(&self) -> Option<&Device> {
        self.filtered().get(self.cursor).copied()
    }

    /// Move the cursor by `delta`, clamped to the filtered list
    pub fn move_cursor(&mut self, delta: isize) {
        let len = self.filtered().len();
        if len == 0 {
            self.cursor = 0;
            return;
        }
        self.cursor = self.cursor.saturating_add_signed(delta).min(len - 1);
    }

    pub fn to_top(&mut self) {
        self.cursor = 0;
    }

    pub fn to_bottom(&mut self) {
        self.cursor = self.filtered().len().saturating_sub(1);
    }

    /// Keep the cursor inside the filtered list after it changed
    pub fn clamp_cursor(&mut self) {
        self.move_cursor(0);
    }
}
