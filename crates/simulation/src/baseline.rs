//! The fixed fleet loaded at startup.

use crate::fleet::{Driver, Metrics, Stop};

/// Three drivers with five stops each, around Nairobi CBD.
pub fn baseline_drivers() -> Vec<Driver> {
    vec![
        Driver::new(
            "Driver A",
            vec![
                Stop::new(1, "123 Main St", -1.2921, 36.8219, "9:00 AM"),
                Stop::new(2, "456 Oak Ave", -1.2864, 36.8172, "9:30 AM"),
                Stop::new(3, "789 Pine Rd", -1.2795, 36.8145, "10:00 AM"),
                Stop::new(4, "321 Elm St", -1.2921, 36.8100, "10:30 AM"),
                Stop::new(5, "654 Birch Ln", -1.2850, 36.8050, "11:00 AM"),
            ],
            Metrics::new(45, 180, 22),
        ),
        Driver::new(
            "Driver B",
            vec![
                Stop::new(6, "111 Cedar Dr", -1.2900, 36.8300, "9:15 AM"),
                Stop::new(7, "222 Maple Ct", -1.2950, 36.8250, "9:45 AM"),
                Stop::new(8, "333 Spruce Way", -1.2980, 36.8200, "10:15 AM"),
                Stop::new(9, "444 Ash Blvd", -1.3000, 36.8150, "10:45 AM"),
                Stop::new(10, "555 Willow St", -1.2920, 36.8280, "11:15 AM"),
            ],
            Metrics::new(38, 165, 19),
        ),
        Driver::new(
            "Driver C",
            vec![
                Stop::new(11, "777 Poplar Ave", -1.2800, 36.8320, "9:20 AM"),
                Stop::new(12, "888 Hickory Ln", -1.2750, 36.8270, "9:50 AM"),
                Stop::new(13, "999 Walnut Dr", -1.2700, 36.8220, "10:20 AM"),
                Stop::new(14, "100 Chestnut Rd", -1.2650, 36.8170, "10:50 AM"),
                Stop::new(15, "200 Sycamore St", -1.2780, 36.8120, "11:20 AM"),
            ],
            Metrics::new(42, 172, 21),
        ),
    ]
}
