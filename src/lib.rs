//! AyurWellness - Constitution Assessment & Personalization Engine
//!
//! This crate implements the prakriti (constitutional type) assessment
//! algorithm and the stores that carry its results: questionnaire scoring,
//! dosha classification, the durable assessment record, the volatile meal
//! log, and the personalization façade that drives diet plan generation.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
