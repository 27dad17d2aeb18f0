//! How to cite UniMorph in academic work

/// BibTeX entry of the UniMorph 4.0 paper
pub const CITATION: &str = r#"@inproceedings{Batsuren-et-al-2022,
    title = "{U}ni{M}orph 4.0: Universal Morphology",
    author = {Batsuren, Khuyagbaatar and Goldman, Omer and Khalifa, Salam and
        Habash, Nizar and Kieraś, Witold and Bella, Gábor and Leonard, Brian and
        Nicolai, Garrett and Gorman, Kyle and Ate, Yustinus Ghanggo and
        Ryskina, Maria and Mielke, Sabrina J. and Budianskaya, Elena and
        El-Khaissi, Charbel and Pimentel, Tiago and Gasser, Michael and
        Lane, William and Raj, Mohit and Coler, Matt and
        Samame, Jaime Rafael Montoya and Camaiteri, Delio Siticonatzi and
        Sagot, Benoît and Rojas, Esaú Zumaeta and Francis, Didier López and
        Oncevay, Arturo and Bautista, Juan López and
        Villegas, Gema Celeste Silva and Hennigen, Lucas Torroba and
        Ek, Adam and Guriel, David and Dirix, Peter and
        Bernardy, Jean-Philippe and Scherbakov, Andrey and
        Bayyr-ool, Aziyana and Anastasopoulos, Antonios and
        Zariquiey, Roberto and Sheifer, Karina and Ganieva, Sofya and
        Cruz, Hilaria and Karahóǧa, Ritván and Markantonatou, Stella and
        Pavlidis, George and Plugaryov, Matvey and Klyachko, Elena and
        Salehi, Ali and Angulo, Candy and Baxi, Jatayu and
        Krizhanovsky, Andrew and Krizhanovskaya, Natalia and
        Salesky, Elizabeth and Vania, Clara and Ivanova, Sardana and
        White, Jennifer and Maudslay, Rowan Hall and Valvoda, Josef and
        Zmigrod, Ran and Czarnowska, Paula and Nikkarinen, Irene and
        Salchak, Aelita and Bhatt, Brijesh and Straughn, Christopher and
        Liu, Zoey and Washington, Jonathan North and Pinter, Yuval and
        Ataman, Duygu and Wolinski, Marcin and Suhardijanto, Totok and
        Yablonskaya, Anna and Stoehr, Niklas and Dolatian, Hossep and
        Nuriah, Zahroh and Ratan, Shyam and Tyers, Francis M. and
        Ponti, Edoardo M. and Aiton, Grant and Arora, Aryaman and
        Hatcher, Richard J. and Kumar, Ritesh and Young, Jeremiah and
        Rodionova, Daria and Yemelina, Anastasia and Andrushko, Taras and
        Marchenko, Igor and Mashkovtseva, Polina and Serova, Alexandra and
        Prud'hommeaux, Emily and Nepomniashchaya, Maria and
        Giunchiglia, Fausto and Chodroff, Eleanor and Hulden, Mans and
        Silfverberg, Miikka and McCarthy, Arya D. and Yarowsky, David and
        Cotterell, Ryan and Tsarfaty, Reut and Vylomova, Ekaterina},
    booktitle = "Proceedings of the 13th International Conference on Language Resources and Evaluation ({LREC} 2022)",
    month = june,
    year = "2022",
    address = "Marseille, France",
    publisher = "European Language Resources Association (ELRA)",
    url = "https://www.aclweb.org/anthology/2022.lrec-836", }
"#;
