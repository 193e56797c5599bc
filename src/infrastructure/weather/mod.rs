pub mod openweather;
