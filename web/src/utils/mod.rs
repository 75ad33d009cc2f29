pub mod geolocation;
