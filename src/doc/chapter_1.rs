/*!
# Program Format

A program is a sequence of lines. Each line is laid out as:

| Bytes | Contents |
|---|---|
| 2 | line number, most significant byte first |
| 2 | length of the text including the final `ENTER`, least significant byte first |
| n | the text of the line |
| 1 | `ENTER` (13) |

Line numbers run from 0 to 9999. The ROM keeps lines in ascending order
but nothing in the format enforces it, and lines are decoded in the order
they appear.

## Tokens

Every keyword is stored as a single byte from 165 (`RND`) to 255 (`COPY`).
See the [token table](../___Appendix_A/index.html). Keywords are recognised
in any case, longest first, so `FORMAT` is one token and never `FOR` plus
`MAT`. A keyword that ends in a letter is not recognised when a letter or
digit follows it, which keeps names like `total` or `gosubs` intact.

One space after a keyword is absorbed into the token. When a line is
listed, keywords are separated from their neighbours by single spaces.

## Numbers

A number in a program is kept twice: the digits as typed, for listing,
followed by the byte 14 and five bytes holding its value, see
[numbers](../__Chapter_2/index.html). Digits that continue a name, as in
`a1`, are only text.

`BIN` literals carry the value of their binary digits. The parameters
of `DEF FN` are each followed by 14 and five empty bytes that the ROM
fills in when the function is called.

## Strings and REM

Everything between quotes is copied as it is. After `REM` the rest of
the line is copied as it is, with no keyword or number scanning.

## Control codes

Colour codes 16 to 21 carry one parameter byte, `AT` and `TAB` (22, 23)
carry two. They are skipped when a line is listed.

*/
