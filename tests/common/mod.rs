pub mod wiki_server;
