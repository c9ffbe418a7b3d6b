mod artist;
mod show;
mod venue;
