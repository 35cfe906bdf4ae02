#![no_std]

//! ESP32-S3 board glue for the FlightWall LED panel.

pub mod platform;
