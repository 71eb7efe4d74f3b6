use crate::convert::{
    CalendarSystem, Chronology, DateConverter, EpochConverter, EpochUnit, FieldsConverter,
    Pattern, StringConverter, StringFieldsConverter, SystemTimeConverter, TimestampConverter,
    ZonedConverter,
};
use crate::json::JSON;

impl JSON for Pattern {}
impl JSON for CalendarSystem {}
impl JSON for Chronology {}
impl JSON for StringConverter {}
impl JSON for DateConverter {}
impl JSON for TimestampConverter {}
impl JSON for SystemTimeConverter {}
impl JSON for EpochConverter {}
impl JSON for EpochUnit {}
impl JSON for ZonedConverter {}
impl JSON for FieldsConverter {}
impl JSON for StringFieldsConverter {}
